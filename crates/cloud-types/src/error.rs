use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CloudError {
    #[error("Missing constant '{name}' for {formula}")]
    MissingConstant { formula: String, name: String },

    #[error("Unknown constant table '{0}'")]
    UnknownTable(String),

    #[error("Shape mismatch: expected {expected} elements, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type CloudResult<T> = Result<T, CloudError>;
