//! SigV4 timestamp formatting.
//!
//! SigV4 requires two date representations derived from the same instant:
//! the full `X-Amz-Date` timestamp (`YYYYMMDDTHHMMSSZ`, ISO 8601 basic) and
//! the 8-character date stamp (`YYYYMMDD`) used in the credential scope and
//! key derivation. Both are always UTC; sub-second precision is truncated.

use chrono::{DateTime, Utc};

/// Format an instant as a SigV4 `X-Amz-Date` timestamp.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use presign_core::time::amz_date;
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(amz_date(instant), "20240101T000000Z");
/// ```
#[must_use]
pub fn amz_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Extract the `YYYYMMDD` date stamp from an `X-Amz-Date` timestamp.
///
/// The date stamp is by definition the first 8 characters of the full
/// timestamp, so both representations always agree on the date.
#[must_use]
pub fn date_stamp(amz_date: &str) -> &str {
    &amz_date[..8]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_should_format_amz_date_in_iso8601_basic() {
        let instant = Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap();
        assert_eq!(amz_date(instant), "20130524T000000Z");
    }

    #[test]
    fn test_should_truncate_subsecond_precision() {
        let instant = Utc
            .with_ymd_and_hms(2024, 6, 30, 23, 59, 59)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(999))
            .unwrap();
        // 999ms must truncate, never round up to the next second.
        assert_eq!(amz_date(instant), "20240630T235959Z");
    }

    #[test]
    fn test_should_derive_date_stamp_from_amz_date() {
        assert_eq!(date_stamp("20240101T000000Z"), "20240101");
    }
}
