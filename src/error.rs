use thiserror::Error;

use crate::config::GENERIC_ERROR_MESSAGE;

/// Every way an API call can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Malformed request: {0}")]
    Encode(String),

    /// A browser facility (window, fetch, storage) was unavailable.
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Error payload the server attaches to failed requests.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    /// Build the error for a non-2xx response, keeping the server message when
    /// there is a non-blank one.
    pub fn rejected(status: u16, body: Option<ErrorBody>) -> Self {
        let message = body
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Self::Rejected { status, message }
    }

    /// Text shown to the user in an error toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// True for 401/403 answers.
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: 401 | 403, .. })
    }
}
