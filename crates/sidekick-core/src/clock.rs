//! Clock abstraction and timestamp formatting.
//!
//! Code that needs "now" takes a [`Clock`] so tests can pin time.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format an instant as ISO-8601 in UTC with millisecond precision.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sidekick_core::format_timestamp;
///
/// let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
/// assert_eq!(format_timestamp(instant), "2024-05-01T12:30:45.000Z");
/// ```
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format the clock's current instant.
pub fn format_now(clock: &dyn Clock) -> String {
    format_timestamp(clock.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_fixed_clock_formats_exactly() {
        let instant = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap()
            + Duration::milliseconds(123);
        assert_eq!(format_now(&FixedClock(instant)), "1999-12-31T23:59:59.123Z");
    }

    #[test]
    fn test_sub_millisecond_truncated() {
        let instant =
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap() + Duration::microseconds(999);
        assert_eq!(format_timestamp(instant), "2024-01-02T03:04:05.000Z");
    }

    #[test]
    fn test_system_clock_round_trips_through_rfc3339() {
        let formatted = format_now(&SystemClock);
        assert!(formatted.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&formatted).is_ok());
    }
}
