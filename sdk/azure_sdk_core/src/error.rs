use thiserror::Error;

/// Errors that can occur when interacting with the Azure Search and Key Vault APIs.
#[derive(Error, Debug)]
pub enum AzureError {
    /// The request failed due to an HTTP error.
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The request payload could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP request failed at the transport level.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint URL is invalid.
    #[error("Invalid endpoint URL: {message}")]
    InvalidEndpoint {
        message: String,
        #[source]
        source: Option<url::ParseError>,
    },

    /// A required configuration value is missing.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// The API returned an error response with an `{"error": {...}}` body.
    #[error("API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// A poll loop gave up before the operation reached a final state.
    #[error("Polling timed out: {0}")]
    PollTimeout(String),

    /// A request builder was given missing or out-of-range values.
    #[error("Builder error: {0}")]
    Builder(String),

    /// A caller-supplied argument was rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A setter was called on a resource pinned to a schema version that
    /// does not have the field.
    #[error("{field} is not supported by {version}")]
    UnsupportedForVersion { field: &'static str, version: String },
}

impl AzureError {
    /// Create an [`AzureError::Http`] from a status code and message.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Create an [`AzureError::InvalidEndpoint`] wrapping a URL parse failure.
    pub fn invalid_endpoint_with_source(message: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidEndpoint {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an [`AzureError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an [`AzureError::UnsupportedForVersion`].
    pub fn unsupported_for_version(field: &'static str, version: impl std::fmt::Display) -> Self {
        Self::UnsupportedForVersion {
            field,
            version: version.to_string(),
        }
    }

    /// The HTTP status code, if this error came from a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for SDK operations.
pub type AzureResult<T> = std::result::Result<T, AzureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display() {
        let err = AzureError::http(404, "not found");
        assert_eq!(err.to_string(), "HTTP error: 404 - not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn api_error_keeps_status() {
        let err = AzureError::Api {
            status: 412,
            code: "PreconditionFailed".into(),
            message: "etag mismatch".into(),
        };
        assert_eq!(err.to_string(), "API error 412 (PreconditionFailed): etag mismatch");
        assert_eq!(err.status(), Some(412));
    }

    #[test]
    fn poll_timeout_has_no_status() {
        let err = AzureError::PollTimeout("still running".into());
        assert_eq!(err.to_string(), "Polling timed out: still running");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn unsupported_for_version_names_field_and_version() {
        let err = AzureError::unsupported_for_version("model_version", "V1");
        assert_eq!(err.to_string(), "model_version is not supported by V1");
        assert!(matches!(
            err,
            AzureError::UnsupportedForVersion { field: "model_version", .. }
        ));
    }

    #[test]
    fn invalid_endpoint_keeps_source() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = AzureError::invalid_endpoint_with_source("bad endpoint", parse_err);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.status(), None);
    }
}
