//! forecourt-core
//!
//! Pure domain types for the dealership self-assessment engine: signal
//! taxonomy, generated-action model, assessment identity. No I/O — this is
//! the shared vocabulary of the Forecourt system.

pub mod error;
pub mod models;

/// Identifier of a survey question, e.g. `nvs-1`.
pub type QuestionId = String;

/// Key of a survey module, e.g. `parts-inventory`.
pub type ModuleKey = String;

/// Finalized answers for one assessment: rating 1..=5 keyed by question id.
/// A missing key means "unanswered", never zero. Ordered so every fold over
/// answers is deterministic.
pub type AnswerSet = std::collections::BTreeMap<QuestionId, u8>;
