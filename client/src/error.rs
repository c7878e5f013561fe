//! Error types for the Event Space API client

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when calling the Event Space API
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body was not the expected JSON
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// The API answered with an error status
    #[error("API error (status {status}, {code}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Machine-readable code from the error body, or `UNKNOWN`
        code: String,
        /// Human-readable message from the error body
        message: String,
    },
}

impl ClientError {
    /// HTTP status of an API error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API reported that the record does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the API rejected the request body or id.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.status() == Some(400)
    }

    /// Build an API error from a status and raw response body.
    ///
    /// Bodies in the `{"error", "code"}` shape are unpacked; anything else is
    /// kept verbatim as the message.
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
            code: Option<String>,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self::Api {
                status,
                code: parsed.code.unwrap_or_else(|| "UNKNOWN".to_string()),
                message: parsed.error,
            },
            Err(_) => Self::Api {
                status,
                code: "UNKNOWN".to_string(),
                message: body.to_string(),
            },
        }
    }
}
