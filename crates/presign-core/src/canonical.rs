//! Canonical request construction for SigV4 presigned URLs.
//!
//! This module implements the canonical request format as specified by AWS:
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```
//!
//! For presigned URLs exactly five query parameters participate in the
//! signature, the only signed header is `host`, and the payload hash is the
//! literal `UNSIGNED-PAYLOAD`. The verifying storage service recomputes the
//! same byte sequence; any divergence in field order, casing, or encoding
//! produces a signature it rejects.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The signing algorithm identifier.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// The payload hash value used for all presigned URL requests.
///
/// Correct only for query-string (presigned) signing; header-based signing
/// hashes the actual body.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// The signed headers string. Only `host` is ever signed, so the signature
/// stays valid regardless of the content headers the eventual PUT carries.
pub const SIGNED_HEADERS: &str = "host";

/// The set of characters percent-encoded in query parameter values.
///
/// All characters except RFC 3986 unreserved characters
/// (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`) are encoded.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build the canonical URI for an object: `/{bucket}/{object_key}`.
///
/// The object key is embedded verbatim. Strict SigV4 would percent-encode
/// each path segment, but the verifying endpoint this service targets
/// accepts (and expects) the raw key, so keys containing reserved
/// characters are the caller's responsibility.
#[must_use]
pub fn build_canonical_uri(bucket: &str, object_key: &str) -> String {
    format!("/{bucket}/{object_key}")
}

/// Build the ordered presign query parameter table.
///
/// Exactly five parameters, in this fixed order (SigV4 requires
/// alphabetical order and this list already is):
///
/// 1. `X-Amz-Algorithm`
/// 2. `X-Amz-Credential` (value percent-encoded; it contains `/`)
/// 3. `X-Amz-Date`
/// 4. `X-Amz-Expires`
/// 5. `X-Amz-SignedHeaders`
///
/// Adding a parameter later is a one-line change here as long as the list
/// stays alphabetically ordered.
#[must_use]
pub fn presign_query_pairs(
    credential: &str,
    amz_date: &str,
    expiry_secs: u64,
) -> Vec<(&'static str, String)> {
    vec![
        ("X-Amz-Algorithm", ALGORITHM.to_owned()),
        ("X-Amz-Credential", query_encode(credential)),
        ("X-Amz-Date", amz_date.to_owned()),
        ("X-Amz-Expires", expiry_secs.to_string()),
        ("X-Amz-SignedHeaders", SIGNED_HEADERS.to_owned()),
    ]
}

/// Join query pairs into the canonical query string.
///
/// Values are expected to be already encoded; no sorting is applied because
/// the table in [`presign_query_pairs`] is constructed in canonical order.
#[must_use]
pub fn build_query_string(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the full canonical request string.
///
/// The canonical headers block is exactly one line (`host:{host}\n`) and
/// the payload hash is always [`UNSIGNED_PAYLOAD`].
#[must_use]
pub fn build_canonical_request(
    method: &str,
    canonical_uri: &str,
    canonical_query: &str,
    host: &str,
) -> String {
    format!(
        "{method}\n{canonical_uri}\n{canonical_query}\nhost:{host}\n\n{SIGNED_HEADERS}\n{UNSIGNED_PAYLOAD}"
    )
}

/// Percent-encode a query parameter value using RFC 3986 unreserved rules.
fn query_encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_canonical_uri_with_verbatim_key() {
        assert_eq!(
            build_canonical_uri("media", "posts/u1/abc.jpg"),
            "/media/posts/u1/abc.jpg"
        );
    }

    #[test]
    fn test_should_percent_encode_credential_slashes() {
        let pairs = presign_query_pairs(
            "AKID/20240101/auto/s3/aws4_request",
            "20240101T000000Z",
            900,
        );
        let (name, value) = &pairs[1];
        assert_eq!(*name, "X-Amz-Credential");
        assert_eq!(value, "AKID%2F20240101%2Fauto%2Fs3%2Faws4_request");
    }

    #[test]
    fn test_should_keep_query_pairs_in_alphabetical_order() {
        let pairs = presign_query_pairs("cred", "20240101T000000Z", 900);
        let names: Vec<&str> = pairs.iter().map(|(n, _)| *n).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_should_join_query_pairs_with_ampersands() {
        let pairs = presign_query_pairs("cred", "20240101T000000Z", 3600);
        let query = build_query_string(&pairs);
        assert_eq!(
            query,
            "X-Amz-Algorithm=AWS4-HMAC-SHA256\
             &X-Amz-Credential=cred\
             &X-Amz-Date=20240101T000000Z\
             &X-Amz-Expires=3600\
             &X-Amz-SignedHeaders=host"
        );
    }

    #[test]
    fn test_should_build_six_line_canonical_request() {
        let canonical = build_canonical_request(
            "PUT",
            "/media/a.jpg",
            "X-Amz-Algorithm=AWS4-HMAC-SHA256",
            "acct.r2.cloudflarestorage.com",
        );
        let expected = "PUT\n\
                        /media/a.jpg\n\
                        X-Amz-Algorithm=AWS4-HMAC-SHA256\n\
                        host:acct.r2.cloudflarestorage.com\n\
                        \n\
                        host\n\
                        UNSIGNED-PAYLOAD";
        assert_eq!(canonical, expected);
    }
}
