use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt data: {0}")]
    CorruptData(String),
}

impl ServiceError {
    pub fn validation(msg: &str) -> Self { Self::Validation(msg.to_string()) }
    pub fn not_found(msg: &str) -> Self { Self::NotFound(msg.to_string()) }

    /// Message meant for API callers, without the variant prefix.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(m) | Self::NotFound(m) => m.clone(),
            Self::Unavailable(_) | Self::CorruptData(_) => self.to_string(),
        }
    }
}
