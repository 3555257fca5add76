use serde::Serialize;

// =============================================================================
// SUCCESS ENVELOPE
// =============================================================================

/// `{"result": ...}`, `{"message": ...}` or both.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn result(result: T) -> Self {
        Self {
            message: None,
            result: Some(result),
        }
    }

    pub fn with_message(message: impl Into<String>, result: T) -> Self {
        Self {
            message: Some(message.into()),
            result: Some(result),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            result: None,
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
