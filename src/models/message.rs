use serde::Deserialize;

/// Generic `{success, message}` acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
