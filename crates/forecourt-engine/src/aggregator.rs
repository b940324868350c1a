//! Signal derivation from module scores.
//!
//! Signals are ephemeral: re-derived from answers and scores on every
//! analysis call, never stored. A module at or above the improvement
//! threshold contributes nothing; below it, every one of its questions is a
//! candidate source and the module's score sets the severity.

use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use forecourt_core::models::{Severity, SignalCode};
use forecourt_questionnaire::all_modules;

use crate::mapping::{SeverityRule, get_signal_mapping, resolve_category_signal};

/// Modules scoring strictly below this need improvement and emit signals.
pub const IMPROVEMENT_THRESHOLD: u8 = 70;

/// Module scores strictly below this escalate their signals to HIGH.
pub const HIGH_SEVERITY_BELOW: u8 = 50;

/// A derived diagnostic finding for one (signal code, module) pair.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Signal {
    pub code: SignalCode,
    pub severity: Severity,
    pub module_key: String,
    pub triggering_question_ids: Vec<String>,
    pub rationale: String,
}

/// Signals plus the coverage gaps encountered while deriving them. An
/// unmapped question degrades silently to no signal; it is reported here so
/// tests and authoring tooling can see the gap, and never shown to end
/// users.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SignalAnalysis {
    pub signals: Vec<Signal>,
    pub unmapped_questions: Vec<String>,
}

fn module_severity(score: u8) -> Severity {
    if score < HIGH_SEVERITY_BELOW {
        Severity::High
    } else {
        Severity::Medium
    }
}

/// Derive the ordered signal set for one assessment from its module scores.
///
/// Candidates come from the explicit mapping row when one exists (primary
/// always, secondary only under the `Weighted` rule), otherwise from the
/// category fallback. Candidates are grouped by (code, module); severity is
/// the maximum among contributors; output is sorted severity-descending with
/// the signal code as a stable tie-break.
pub fn derive_signals(module_scores: &BTreeMap<String, u8>) -> SignalAnalysis {
    let mut groups: BTreeMap<(SignalCode, String), (Severity, Vec<String>, String)> =
        BTreeMap::new();
    let mut unmapped_questions = Vec::new();

    for module in all_modules() {
        let Some(&score) = module_scores.get(module.key()) else {
            continue;
        };
        if score >= IMPROVEMENT_THRESHOLD {
            continue;
        }
        let severity = module_severity(score);

        for question in module.questions() {
            let mut candidates: Vec<SignalCode> = Vec::new();
            match get_signal_mapping(&question.id) {
                Some(mapping) => {
                    if mapping.primary != SignalCode::None {
                        candidates.push(mapping.primary);
                    }
                    if mapping.severity_rule == SeverityRule::Weighted
                        && let Some(secondary) = mapping.secondary
                        && secondary != SignalCode::None
                    {
                        candidates.push(secondary);
                    }
                }
                None => {
                    let fallback = resolve_category_signal(&question.category);
                    if fallback == SignalCode::None {
                        unmapped_questions.push(question.id.clone());
                    } else {
                        candidates.push(fallback);
                    }
                }
            }

            for code in candidates {
                let entry = groups
                    .entry((code, module.key().to_string()))
                    .or_insert_with(|| (severity, Vec::new(), module.name().to_string()));
                entry.0 = entry.0.max(severity);
                entry.1.push(question.id.clone());
            }
        }
    }

    let mut signals: Vec<Signal> = groups
        .into_iter()
        .map(|((code, module_key), (severity, question_ids, module_name))| Signal {
            code,
            severity,
            module_key,
            triggering_question_ids: question_ids,
            rationale: format!("{}. Flagged in {}.", code.description(), module_name),
        })
        .collect();

    signals.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| a.code.as_str().cmp(b.code.as_str()))
            .then_with(|| a.module_key.cmp(&b.module_key))
    });

    SignalAnalysis {
        signals,
        unmapped_questions,
    }
}
