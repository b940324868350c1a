use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("missing identity: {0}")]
    MissingIdentity(&'static str),
}
