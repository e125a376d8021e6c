use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors a request can end in. Both are final: nothing is stored for an
/// invalid receipt and nothing is retried.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Every field problem found in the submitted receipt. Clients only see
    /// the generic message.
    #[error("The receipt is invalid.")]
    InvalidReceipt(Vec<String>),

    #[error("No receipt found for that ID.")]
    NotFound(String),
}

impl ReceiptError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptError::InvalidReceipt(_) => StatusCode::BAD_REQUEST,
            ReceiptError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        match &self {
            ReceiptError::InvalidReceipt(problems) => {
                tracing::debug!(?problems, "rejected receipt");
            }
            ReceiptError::NotFound(id) => {
                tracing::debug!(%id, "receipt lookup missed");
            }
        }
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_generic() {
        let invalid = ReceiptError::InvalidReceipt(vec!["total: bad".to_string()]);
        assert_eq!(invalid.to_string(), "The receipt is invalid.");

        let missing = ReceiptError::NotFound("Receipt9".to_string());
        assert_eq!(missing.to_string(), "No receipt found for that ID.");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ReceiptError::InvalidReceipt(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ReceiptError::NotFound(String::new()).status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
