use serde::{Deserialize, Serialize};

/// Liveness probe body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ping {
    pub success: bool,
}

impl Ping {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Plain acknowledgement for mutations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Acknowledgement for a create, carrying the assigned id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}
