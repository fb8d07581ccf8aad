//! JSON error body shared by every non-2xx response.

use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }

    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code.as_str(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_code_and_message() {
        let response = ErrorResponse::new("HOTEL_NOT_FOUND", "Hotel not found: 9");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error_code": "HOTEL_NOT_FOUND",
                "message": "Hotel not found: 9"
            })
        );
    }

    #[test]
    fn error_response_from_code_uses_wire_name() {
        let response = ErrorResponse::from_code(ErrorCode::PaymentRequired, "Pay first");
        assert_eq!(response.error_code, "PAYMENT_REQUIRED");
        assert_eq!(response.message, "Pay first");
    }
}
