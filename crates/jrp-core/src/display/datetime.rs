//! DateTime display utilities.

use std::fmt;

use jiff::Zoned;

/// A wrapper around `Zoned` that formats it as `YYYY-MM-DD HH:MM:SS TZ` in
/// the time zone it was recorded in.
pub struct LocalDateTime<'a>(pub &'a Zoned);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, tz::TimeZone};

    use super::*;

    #[test]
    fn test_local_date_time_format() {
        let zoned = Timestamp::from_second(1640995200)
            .unwrap()
            .to_zoned(TimeZone::UTC);
        assert_eq!(
            LocalDateTime(&zoned).to_string(),
            "2022-01-01 00:00:00 UTC"
        );
    }
}
