use serde::{Deserialize, Serialize};

/// Request body for `POST /format-text`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatRequest {
    pub text: String,
}

/// Response body from `POST /format-text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatResponse {
    pub formatted_text: String,
}

/// Fixed user-facing message for a failed formatting request. The
/// underlying cause goes to the log, never to the user.
pub const FORMAT_FAILED: &str =
    "Failed to format text. Check that the backend is running and try again.";
