use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::signal::SignalCode;

/// Dealership role an action defaults to. The action-plan UI may reassign
/// to a named person later; the engine only ever sets the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OwnerRole {
    GeneralManager,
    SalesManager,
    ServiceManager,
    PartsManager,
    CustomerExperienceLead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Lifecycle of a generated action. The engine only ever writes `Open`;
/// every later transition belongs to the action-plan UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActionStatus {
    Open,
    InProgress,
    Done,
    Dismissed,
}

/// A concrete improvement action instantiated from a template for one
/// assessment. `(assessment_id, template_id)` is the idempotency key: the
/// persistence layer holds a uniqueness constraint on it, and the generator
/// never emits a pair that already exists.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedAction {
    pub organization_id: Uuid,
    pub assessment_id: Uuid,
    pub template_id: String,
    pub signal_code: SignalCode,
    pub title: String,
    pub description: String,
    pub owner_role: OwnerRole,
    pub priority: Priority,
    pub due_date: jiff::civil::Date,
    pub status: ActionStatus,
}
