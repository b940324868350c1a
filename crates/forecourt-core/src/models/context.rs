use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Tenant and assessment identity for one generation run, plus the date the
/// assessment was completed (anchor for action due dates).
///
/// Construction validates identity: action generation fails closed when the
/// caller cannot say which organization and assessment it is acting for,
/// because assigning actions to the wrong tenant is worse than generating
/// none. Use [`AssessmentContext::resolve`] with whatever the auth layer
/// handed over; `None` and the nil uuid both count as missing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentContext {
    pub organization_id: Uuid,
    pub assessment_id: Uuid,
    pub completed_on: jiff::civil::Date,
}

impl AssessmentContext {
    pub fn resolve(
        organization_id: Option<Uuid>,
        assessment_id: Option<Uuid>,
        completed_on: jiff::civil::Date,
    ) -> Option<Self> {
        let organization_id = organization_id.filter(|id| !id.is_nil())?;
        let assessment_id = assessment_id.filter(|id| !id.is_nil())?;
        Some(Self {
            organization_id,
            assessment_id,
            completed_on,
        })
    }

    /// Build a context from the raw string identifiers the auth/persistence
    /// layer hands over. Malformed uuids and nil identity both fail.
    pub fn from_raw(
        organization_id: &str,
        assessment_id: &str,
        completed_on: jiff::civil::Date,
    ) -> Result<Self, CoreError> {
        let organization_id = Uuid::parse_str(organization_id.trim())?;
        let assessment_id = Uuid::parse_str(assessment_id.trim())?;
        if organization_id.is_nil() {
            return Err(CoreError::MissingIdentity("organization_id"));
        }
        if assessment_id.is_nil() {
            return Err(CoreError::MissingIdentity("assessment_id"));
        }
        Ok(Self {
            organization_id,
            assessment_id,
            completed_on,
        })
    }
}
