//! Action generation from the derived signal set.
//!
//! Runs once per completed assessment. Output is bounded by the per-signal
//! cap and the `(assessment_id, template_id)` idempotency key; re-running
//! against the same inputs only fills in missing template instances and
//! never touches rows that already exist, including rows the user has
//! edited downstream.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use forecourt_core::models::{
    ActionStatus, AssessmentContext, GeneratedAction, SignalCode,
};

use crate::aggregator::Signal;
use crate::catalog::{ActionTemplate, get_template};
use crate::error::EngineError;
use crate::playbook::playbook_entry;

/// Newly generated actions plus the signals that resolved to nothing. A
/// skipped signal means the playbook has no entry for its code; processing
/// continues for the rest.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct GenerationOutcome {
    pub actions: Vec<GeneratedAction>,
    pub skipped_signals: Vec<SignalCode>,
}

/// Generate the concrete action set for one assessment.
///
/// Signals are processed in the severity-sorted order the aggregator
/// produced. Deduplication by template id is global across the whole run:
/// when two signals resolve to the same template, only the first encountered
/// instantiates it. Missing or nil identity fails closed with
/// [`EngineError::MissingContext`] and zero actions.
pub fn generate_actions(
    organization_id: Option<Uuid>,
    assessment_id: Option<Uuid>,
    completed_on: jiff::civil::Date,
    signals: &[Signal],
    existing: &[GeneratedAction],
) -> Result<GenerationOutcome, EngineError> {
    let ctx = AssessmentContext::resolve(organization_id, assessment_id, completed_on)
        .ok_or(EngineError::MissingContext)?;

    let mut instantiated: BTreeSet<&str> = existing
        .iter()
        .filter(|a| a.assessment_id == ctx.assessment_id)
        .map(|a| a.template_id.as_str())
        .collect();

    let mut actions: Vec<GeneratedAction> = Vec::new();
    let mut skipped_signals = Vec::new();

    for signal in signals {
        let Some(entry) = playbook_entry(signal.code) else {
            skipped_signals.push(signal.code);
            continue;
        };

        for template_id in entry.capped_template_ids() {
            if instantiated.contains(template_id) {
                continue;
            }
            let Some(template) = get_template(template_id) else {
                debug!(template_id = %template_id, "playbook references unknown template, skipping");
                continue;
            };
            actions.push(instantiate(&ctx, signal, template));
            instantiated.insert(template.template_id);
        }
    }

    debug!(
        assessment_id = %ctx.assessment_id,
        new_actions = actions.len(),
        skipped = skipped_signals.len(),
        "action generation complete"
    );

    Ok(GenerationOutcome {
        actions,
        skipped_signals,
    })
}

fn instantiate(
    ctx: &AssessmentContext,
    signal: &Signal,
    template: &ActionTemplate,
) -> GeneratedAction {
    GeneratedAction {
        organization_id: ctx.organization_id,
        assessment_id: ctx.assessment_id,
        template_id: template.template_id.to_string(),
        signal_code: signal.code,
        title: template.title.to_string(),
        // The prefix is a traceability contract: every action names the
        // signal that triggered it.
        description: format!(
            "Triggered because: {}. {}",
            signal.code, template.description
        ),
        owner_role: template.default_owner_role,
        priority: template.default_priority,
        due_date: ctx
            .completed_on
            .saturating_add(jiff::Span::new().days(template.default_timeframe_days)),
        status: ActionStatus::Open,
    }
}
