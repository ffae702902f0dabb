use thiserror::Error;

/// Errors raised while building or validating domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("invalid {kind}: {value}")]
    InvalidEnum { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
