//! Request error taxonomy

use thiserror::Error;

/// Why a backend call failed
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("{} (HTTP {status})", status_text(.status, .message))]
    Status {
        /// HTTP status code
        status: u16,
        /// Message from the response body, when it carried one
        message: Option<String>,
    },

    /// The response body did not have the expected shape
    #[error("unexpected response: {0}")]
    Payload(String),

    /// The operation needs a signed-in user
    #[error("not logged in")]
    NotAuthenticated,
}

#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn status_text(status: &u16, message: &Option<String>) -> String {
    message.clone().unwrap_or_else(|| {
        reqwest::StatusCode::from_u16(*status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Request failed")
            .to_string()
    })
}

impl RequestError {
    /// A rejection with a message from the backend
    #[cfg(test)]
    pub(crate) fn rejected(status: u16, message: &str) -> Self {
        Self::Status {
            status,
            message: Some(message.to_string()),
        }
    }

    /// Text suitable for showing to the user
    ///
    /// For a rejection without a backend message this is the status reason.
    pub fn message(&self) -> String {
        match self {
            Self::Status { status, message } => status_text(status, message),
            other => other.to_string(),
        }
    }

    /// The message the backend sent with a rejection, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status, when the backend answered
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_is_backend_text() {
        let err = RequestError::rejected(401, "Invalid credentials");
        assert_eq!(err.message(), "Invalid credentials");
        assert_eq!(err.backend_message(), Some("Invalid credentials"));
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Invalid credentials (HTTP 401)");
    }

    #[test]
    fn test_not_authenticated() {
        assert_eq!(RequestError::NotAuthenticated.message(), "not logged in");
        assert_eq!(RequestError::NotAuthenticated.status(), None);
    }

    #[test]
    fn test_status_without_message_uses_reason() {
        let err = RequestError::Status {
            status: 422,
            message: None,
        };
        assert_eq!(err.message(), "Unprocessable Entity");
        assert_eq!(err.backend_message(), None);
        assert_eq!(err.to_string(), "Unprocessable Entity (HTTP 422)");
    }
}
