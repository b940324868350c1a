//! forecourt-engine
//!
//! Diagnostic scoring and action generation for the dealership
//! self-assessment. Pure, synchronous computation over finalized answers and
//! static tables: per-module and overall scores, derived signals, and the
//! capped, idempotent set of recommended actions. All I/O, auth, and
//! persistence belong to the callers.

pub mod aggregator;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod mapping;
pub mod playbook;
pub mod scoring;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

use forecourt_core::AnswerSet;
use forecourt_core::models::{GeneratedAction, SignalCode};
use forecourt_questionnaire::module_weights;

use aggregator::{Signal, derive_signals};
use error::EngineError;
use generator::generate_actions;
use scoring::{OverallScore, compute_module_scores, compute_overall_score};

/// Everything the engine needs for one "assessment completed" event.
pub struct AnalysisInput<'a> {
    pub organization_id: Option<Uuid>,
    pub assessment_id: Option<Uuid>,
    pub completed_on: jiff::civil::Date,
    pub answers: &'a AnswerSet,
    /// Actions already persisted for this assessment, so a re-run only
    /// inserts what is missing.
    pub existing_actions: &'a [GeneratedAction],
}

/// Full analysis result: scores, signals, and the actions to insert.
/// `unmapped_questions` and `skipped_signals` report coverage gaps without
/// having interrupted the run.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct AssessmentAnalysis {
    pub module_scores: BTreeMap<String, u8>,
    pub overall: OverallScore,
    pub signals: Vec<Signal>,
    pub new_actions: Vec<GeneratedAction>,
    pub unmapped_questions: Vec<String>,
    pub skipped_signals: Vec<SignalCode>,
}

/// Run the whole pipeline for one completed assessment: scoring, signal
/// derivation, action generation. Fails only on missing identity; data
/// problems degrade feature by feature and are reported on the result.
pub fn analyze_assessment(input: AnalysisInput<'_>) -> Result<AssessmentAnalysis, EngineError> {
    let module_scores = compute_module_scores(input.answers);
    let overall = compute_overall_score(&module_scores, &module_weights());
    let signal_analysis = derive_signals(&module_scores);
    let outcome = generate_actions(
        input.organization_id,
        input.assessment_id,
        input.completed_on,
        &signal_analysis.signals,
        input.existing_actions,
    )?;

    info!(
        overall = overall.value,
        data_incomplete = overall.data_incomplete,
        signals = signal_analysis.signals.len(),
        new_actions = outcome.actions.len(),
        "assessment analyzed"
    );

    Ok(AssessmentAnalysis {
        module_scores,
        overall,
        signals: signal_analysis.signals,
        new_actions: outcome.actions,
        unmapped_questions: signal_analysis.unmapped_questions,
        skipped_signals: outcome.skipped_signals,
    })
}
