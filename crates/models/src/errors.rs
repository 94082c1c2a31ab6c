use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ModelError {
    /// The client-facing message, without the taxonomy prefix.
    pub fn message(&self) -> &str {
        match self {
            ModelError::Validation(msg) => msg,
        }
    }
}
