//! Timestamp source for `createdAt` / `updatedAt`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Supplies the current time as a stored timestamp string.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Wall-clock time, formatted like `2025-01-31T12:00:00.000Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        format_timestamp(Utc::now())
    }
}

/// A clock that always returns the same instant. Useful in tests.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

/// ISO-8601 UTC with millisecond precision and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_matches_stored_layout() {
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(at), "2025-01-31T12:00:00.000Z");
    }

    #[test]
    fn test_system_clock_parses_back() {
        let now = SystemClock.now();
        assert!(DateTime::parse_from_rfc3339(&now).is_ok());
        assert!(now.ends_with('Z'));
    }
}
