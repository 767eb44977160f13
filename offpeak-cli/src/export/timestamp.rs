use chrono::{DateTime, NaiveDateTime, ParseResult};

/// Offset-less formats, tried in order after RFC 3339.
const NAIVE_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse an export timestamp into local wall-clock time.
///
/// An explicit UTC offset is dropped, keeping the wall-clock fields as they are written.
pub fn parse_timestamp(text: &str) -> ParseResult<NaiveDateTime> {
    let rfc3339 = DateTime::parse_from_rfc3339(text).map(|timestamp| timestamp.naive_local());
    NAIVE_FORMATS.iter().fold(rfc3339, |result, format| {
        result.or_else(|_| NaiveDateTime::parse_from_str(text, format))
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn expected(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 14).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_offset_is_dropped() {
        assert_eq!(parse_timestamp("2024-07-14T23:30:00+01:00").unwrap(), expected(23, 30));
    }

    #[test]
    fn test_utc() {
        assert_eq!(parse_timestamp("2024-07-14T05:30:00Z").unwrap(), expected(5, 30));
    }

    #[test]
    fn test_naive() {
        assert_eq!(parse_timestamp("2024-07-14T05:30:00").unwrap(), expected(5, 30));
        assert_eq!(parse_timestamp("2024-07-14 05:30:00").unwrap(), expected(5, 30));
        assert_eq!(parse_timestamp("2024-07-14T05:30").unwrap(), expected(5, 30));
    }

    #[test]
    fn test_invalid() {
        assert!(parse_timestamp("14/07/2024 05:30").is_err());
        assert!(parse_timestamp("").is_err());
    }
}
