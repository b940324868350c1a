//! forecourt-questionnaire
//!
//! The live dealership self-assessment questionnaire. Pure data — five
//! survey modules, each a static table of 1–5 rated questions, plus the
//! module weights the overall score is built from.

pub mod error;
pub mod modules;
pub mod question;

use std::collections::BTreeMap;

use forecourt_core::AnswerSet;

use error::QuestionnaireError;
use question::{AnswerValidationError, Question};

/// Trait implemented by each survey module (business area).
pub trait SurveyModule: Send + Sync {
    /// Stable key, e.g. "parts-inventory". Used by scoring and mapping.
    fn key(&self) -> &str;

    /// Human-readable name, e.g. "Parts & Inventory".
    fn name(&self) -> &str;

    /// Share of this module in the overall score. All weights sum to 1.0.
    fn weight(&self) -> f64;

    /// The questions this module asks, in presentation order.
    fn questions(&self) -> &[Question];

    /// Validate submitted ratings against this module's question scales.
    /// Only answered questions are checked; absence means unanswered.
    fn validate_answers(&self, answers: &AnswerSet) -> Vec<AnswerValidationError> {
        let mut errors = Vec::new();
        for question in self.questions() {
            if let Some(&rating) = answers.get(&question.id)
                && !question.scale.contains(rating)
            {
                errors.push(AnswerValidationError {
                    question_id: question.id.clone(),
                    rating,
                    expected_scale: question.scale,
                    message: format!(
                        "{}: rating {} for '{}' is outside [{}, {}]",
                        self.name(),
                        rating,
                        question.id,
                        question.scale.min,
                        question.scale.max,
                    ),
                });
            }
        }
        errors
    }
}

/// Return all survey modules in presentation order.
pub fn all_modules() -> Vec<Box<dyn SurveyModule>> {
    vec![
        Box::new(modules::new_vehicle_sales::NewVehicleSales),
        Box::new(modules::used_vehicle_sales::UsedVehicleSales),
        Box::new(modules::aftersales_service::AftersalesService),
        Box::new(modules::parts_inventory::PartsInventory),
        Box::new(modules::customer_experience::CustomerExperience),
    ]
}

/// Look up a module by key.
pub fn get_module(key: &str) -> Option<Box<dyn SurveyModule>> {
    all_modules().into_iter().find(|m| m.key() == key)
}

/// Look up a module by key, erroring on unknown keys. For callers that
/// treat a bad key as a fault rather than an absence.
pub fn require_module(key: &str) -> Result<Box<dyn SurveyModule>, QuestionnaireError> {
    get_module(key).ok_or_else(|| QuestionnaireError::UnknownModule(key.to_string()))
}

/// Validate a full submission before it is finalized: every answered id
/// must belong to the live questionnaire, and every rating must be within
/// its question's scale. Returns the first violation found.
pub fn validate_submission(answers: &AnswerSet) -> Result<(), QuestionnaireError> {
    let modules = all_modules();
    for question_id in answers.keys() {
        let known = modules
            .iter()
            .any(|m| m.questions().iter().any(|q| &q.id == question_id));
        if !known {
            return Err(QuestionnaireError::UnknownQuestion {
                question_id: question_id.clone(),
            });
        }
    }
    for module in &modules {
        if let Some(error) = module.validate_answers(answers).into_iter().next() {
            return Err(QuestionnaireError::Validation(error));
        }
    }
    Ok(())
}

/// Declared module weights, keyed by module key.
pub fn module_weights() -> BTreeMap<String, f64> {
    all_modules()
        .iter()
        .map(|m| (m.key().to_string(), m.weight()))
        .collect()
}

/// Every question id in the live questionnaire.
pub fn all_question_ids() -> Vec<String> {
    all_modules()
        .iter()
        .flat_map(|m| m.questions().iter().map(|q| q.id.clone()).collect::<Vec<_>>())
        .collect()
}
