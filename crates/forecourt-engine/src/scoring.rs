//! Module and overall score computation.
//!
//! Scores are pure functions of the finalized answers: a module score is the
//! plain average of its answered ratings scaled to 0–100, and the overall
//! score is the weighted sum over modules that have one. Unanswered modules
//! drop out of the sum entirely; they are never treated as zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use forecourt_core::AnswerSet;
use forecourt_questionnaire::all_modules;
use forecourt_questionnaire::question::Question;

use crate::error::ScoringError;

/// Tolerance for the declared-weights-sum-to-one invariant.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Overall weighted score plus the incompleteness condition. A `value` of 0
/// with `data_incomplete` set means "nothing was answered", which readers
/// must not confuse with a genuine zero score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverallScore {
    pub value: f64,
    pub data_incomplete: bool,
}

/// Score one module: average of answered ratings scaled to 0–100, rounded
/// half-up. Returns `None` when no question in the module was answered.
/// Ratings outside the question's scale are ignored as if unanswered.
pub fn compute_module_score(questions: &[Question], answers: &AnswerSet) -> Option<u8> {
    let mut sum: u32 = 0;
    let mut count: u32 = 0;
    for question in questions {
        if let Some(&rating) = answers.get(&question.id)
            && question.scale.contains(rating)
        {
            sum += u32::from(rating);
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    let average = f64::from(sum) / f64::from(count);
    Some((average / 5.0 * 100.0).round() as u8)
}

/// Score every live module. Modules with no answered question are absent
/// from the result, not present with zero.
pub fn compute_module_scores(answers: &AnswerSet) -> BTreeMap<String, u8> {
    let mut scores = BTreeMap::new();
    for module in all_modules() {
        if let Some(score) = compute_module_score(module.questions(), answers) {
            scores.insert(module.key().to_string(), score);
        }
    }
    scores
}

/// Weighted overall score over modules with a defined score. Iteration is
/// over the ordered weight table, so the result is bit-identical regardless
/// of how the caller assembled its maps. Weights are not renormalized when
/// modules are missing; absent modules drop out of the numerator only.
pub fn compute_overall_score(
    module_scores: &BTreeMap<String, u8>,
    weights: &BTreeMap<String, f64>,
) -> OverallScore {
    let mut value = 0.0;
    let mut any_defined = false;
    for (module_key, weight) in weights {
        if let Some(&score) = module_scores.get(module_key) {
            value += f64::from(score) * weight;
            any_defined = true;
        }
    }
    if !any_defined {
        return OverallScore {
            value: 0.0,
            data_incomplete: true,
        };
    }
    OverallScore {
        value,
        data_incomplete: false,
    }
}

/// Authoring check: declared weights are each in (0, 1] and sum to 1.0
/// within [`WEIGHT_TOLERANCE`]. Exercised by tests, not at runtime.
pub fn validate_weights(weights: &BTreeMap<String, f64>) -> Result<(), ScoringError> {
    for (module_key, &weight) in weights {
        if !(weight > 0.0 && weight <= 1.0) {
            return Err(ScoringError::WeightOutOfRange {
                module_key: module_key.clone(),
                weight,
            });
        }
    }
    let sum: f64 = weights.values().sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ScoringError::WeightSum { sum });
    }
    Ok(())
}
