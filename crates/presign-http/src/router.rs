//! Request routing: mapping `(method, path)` pairs to signing operations.
//!
//! The surface is deliberately tiny: two POST endpoints (one per signing
//! shape) plus a health probe. Anything else is a routing miss that the
//! service turns into a 404 JSON error.

use http::Method;

/// The signing operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Sign an upload (PUT) URL: `POST /presign/upload`.
    PresignUpload,
    /// Sign a read (GET) URL: `POST /presign/read`.
    PresignRead,
}

/// Resolve a request to a signing operation, if it matches one.
#[must_use]
pub fn resolve(method: &Method, path: &str) -> Option<Operation> {
    if *method != Method::POST {
        return None;
    }
    match path {
        "/presign/upload" => Some(Operation::PresignUpload),
        "/presign/read" => Some(Operation::PresignRead),
        _ => None,
    }
}

/// Check if the request is a health check probe.
#[must_use]
pub fn is_health_check(method: &Method, path: &str) -> bool {
    *method == Method::GET && (path == "/health" || path == "/_health")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_resolve_presign_endpoints() {
        assert_eq!(
            resolve(&Method::POST, "/presign/upload"),
            Some(Operation::PresignUpload)
        );
        assert_eq!(
            resolve(&Method::POST, "/presign/read"),
            Some(Operation::PresignRead)
        );
    }

    #[test]
    fn test_should_not_resolve_wrong_method_or_path() {
        assert_eq!(resolve(&Method::GET, "/presign/upload"), None);
        assert_eq!(resolve(&Method::POST, "/presign"), None);
        assert_eq!(resolve(&Method::POST, "/"), None);
    }

    #[test]
    fn test_should_detect_health_check_paths() {
        assert!(is_health_check(&Method::GET, "/health"));
        assert!(is_health_check(&Method::GET, "/_health"));
        assert!(!is_health_check(&Method::POST, "/health"));
        assert!(!is_health_check(&Method::GET, "/presign/upload"));
    }
}
