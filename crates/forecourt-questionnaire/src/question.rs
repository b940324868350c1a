use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The valid rating range for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatingScale {
    pub min: u8,
    pub max: u8,
}

/// Standard 1–5 agreement scale used by every live question.
pub const LIKERT_1_5: RatingScale = RatingScale { min: 1, max: 5 };

impl RatingScale {
    pub fn contains(&self, rating: u8) -> bool {
        rating >= self.min && rating <= self.max
    }
}

/// One survey question. `category` is a free-text key consumed by the
/// category→signal lookup; `weight` drives emphasis in the survey UI and is
/// not part of the scoring formula (module scores are plain averages).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: String,
    pub weight: f64,
    pub scale: RatingScale,
}

/// A submitted rating that violates the question's scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerValidationError {
    pub question_id: String,
    pub rating: u8,
    pub expected_scale: RatingScale,
    pub message: String,
}
