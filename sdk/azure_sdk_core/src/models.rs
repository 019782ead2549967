//! Common types shared across the Search and Key Vault crates.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Characters percent-encoded when a resource name is placed in a URL path.
///
/// Covers everything that would end the segment (`/`, `?`, `#`), start an
/// escape (`%`), or is not allowed unescaped in a path. Single quotes and
/// parentheses are left alone so OData key syntax stays readable.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b'[')
    .add(b']');

/// Percent-encode a resource name for use as (part of) a URL path segment.
///
/// ```
/// use azure_sdk_core::models::encode_path_segment;
///
/// assert_eq!(encode_path_segment("hotels"), "hotels");
/// assert_eq!(encode_path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Conditional request headers used for ETag-based optimistic concurrency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchConditions {
    /// Sent as `If-Match`; the request fails with 412 if the server's ETag differs.
    pub if_match: Option<String>,
    /// Sent as `If-None-Match`; `*` makes a PUT fail if the resource already exists.
    pub if_none_match: Option<String>,
}

impl MatchConditions {
    /// No conditions.
    pub fn none() -> Self {
        Self::default()
    }

    /// Require the server copy to still carry `etag`.
    pub fn if_match(etag: impl Into<String>) -> Self {
        Self {
            if_match: Some(etag.into()),
            if_none_match: None,
        }
    }

    /// Build the conditions for an "only if unchanged" update.
    ///
    /// Returns no conditions when `only_if_unchanged` is false or the resource
    /// has never been read from the server (no ETag).
    pub fn only_if_unchanged(only_if_unchanged: bool, etag: Option<&str>) -> Self {
        match (only_if_unchanged, etag) {
            (true, Some(etag)) => Self::if_match(etag),
            _ => Self::none(),
        }
    }

    /// Returns `true` if no condition headers will be sent.
    pub fn is_empty(&self) -> bool {
        self.if_match.is_none() && self.if_none_match.is_none()
    }
}

/// An error object returned inside a resource body (for example a failed operation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// The error code.
    pub code: Option<String>,
    /// Human-readable error description.
    pub message: Option<String>,
    /// A nested error with more detail, if any.
    #[serde(rename = "innererror", skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<Box<ErrorDetail>>,
}
