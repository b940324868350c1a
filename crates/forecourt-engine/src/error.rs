use thiserror::Error;

/// The only caller-visible failure of the engine. Incomplete data never
/// errors; missing identity always does, because generating actions for an
/// unknown tenant is worse than generating none.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("organization or assessment identity missing; refusing to generate actions")]
    MissingContext,
}

/// Authoring violations in the declared weight table. Raised by the
/// test-time weight check, never during an analysis run.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("module weights sum to {sum}, expected 1.0")]
    WeightSum { sum: f64 },

    #[error("module '{module_key}' has weight {weight}, expected a value in (0, 1]")]
    WeightOutOfRange { module_key: String, weight: f64 },
}
