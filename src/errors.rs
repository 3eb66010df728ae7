use thiserror::Error;

/// Error type for invalid engine inputs that cannot be resolved by clamping.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
