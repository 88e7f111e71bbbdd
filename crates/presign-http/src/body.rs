//! Response body types supporting buffered and empty modes.
//!
//! [`JsonBody`] is the HTTP response body type used throughout the presign
//! service. Responses are small JSON payloads, so a buffered mode plus an
//! empty mode (CORS preflight) covers everything.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body_util::Full;

/// Response body supporting buffered and empty modes.
///
/// Implements [`http_body::Body`] so it can be used directly with hyper
/// responses.
#[derive(Debug, Default)]
pub enum JsonBody {
    /// Buffered body for JSON payloads and error bodies.
    Buffered(Full<Bytes>),
    /// Empty body for preflight responses.
    #[default]
    Empty,
}

impl JsonBody {
    /// Create a buffered body from a UTF-8 string.
    #[must_use]
    pub fn from_string(s: impl Into<String>) -> Self {
        Self::Buffered(Full::new(Bytes::from(s.into())))
    }

    /// Create an empty body.
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }
}

impl http_body::Body for JsonBody {
    type Data = Bytes;
    type Error = std::io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<http_body::Frame<Self::Data>, Self::Error>>> {
        match self.get_mut() {
            Self::Buffered(full) => Pin::new(full)
                .poll_frame(cx)
                .map_err(|never| match never {}),
            Self::Empty => Poll::Ready(None),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            Self::Buffered(full) => full.is_end_stream(),
            Self::Empty => true,
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self {
            Self::Buffered(full) => full.size_hint(),
            Self::Empty => http_body::SizeHint::with_exact(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body::Body;

    use super::*;

    #[test]
    fn test_should_report_empty_body_as_end_of_stream() {
        let body = JsonBody::empty();
        assert!(body.is_end_stream());
        assert_eq!(body.size_hint().exact(), Some(0));
    }

    #[test]
    fn test_should_create_buffered_body_from_string() {
        let body = JsonBody::from_string(r#"{"error":"fileName is required"}"#);
        assert!(!body.is_end_stream());
        assert_eq!(body.size_hint().exact(), Some(32));
    }

    #[test]
    fn test_should_default_to_empty() {
        let body = JsonBody::default();
        assert!(body.is_end_stream());
    }
}
