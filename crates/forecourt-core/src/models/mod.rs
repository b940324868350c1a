pub mod action;
pub mod context;
pub mod signal;

pub use action::{ActionStatus, GeneratedAction, OwnerRole, Priority};
pub use context::AssessmentContext;
pub use signal::{Severity, SignalCode};
