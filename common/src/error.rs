use thiserror::Error;

/// Message shown for every failure that does not come with a server-supplied reason.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Everything that can end a form submission without success.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never completed or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A success status whose body does not match the expected schema.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A failure status carrying an `{ "error": ... }` body.
    #[error("Rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// A failure status without a usable error body.
    #[error("Request failed with status {0}")]
    Status(u16),
}

impl ClientError {
    /// Text of the blocking notification shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected { message, .. } => format!("Error: {}", message),
            _ => GENERIC_FAILURE.to_string(),
        }
    }

    /// Whether the failure belongs on the diagnostic console as well.
    ///
    /// Server rejections are expected outcomes and are only shown to the user.
    pub fn is_diagnostic(&self) -> bool {
        !matches!(self, ClientError::Rejected { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown timezone: {0}")]
    Timezone(String),
}
