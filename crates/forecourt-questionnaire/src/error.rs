use thiserror::Error;

use crate::question::AnswerValidationError;

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("unknown module: {0}")]
    UnknownModule(String),

    #[error("validation failed: {0}")]
    Validation(#[from] AnswerValidationError),

    #[error("answer references unknown question '{question_id}'")]
    UnknownQuestion { question_id: String },
}
