//! Date display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that displays the calendar date in a time
/// zone, formatted `M/D/YYYY` without zero padding.
pub struct LocalDate<'a> {
    timestamp: &'a Timestamp,
    time_zone: TimeZone,
}

impl<'a> LocalDate<'a> {
    /// Date in the system time zone.
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self::in_zone(timestamp, TimeZone::system())
    }

    pub fn in_zone(timestamp: &'a Timestamp, time_zone: TimeZone) -> Self {
        Self {
            timestamp,
            time_zone,
        }
    }
}

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.time_zone.clone())
                .strftime("%-m/%-d/%Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_unpadded() {
        let ts = Timestamp::from_second(1704164400).unwrap(); // 2024-01-02 03:00:00 UTC
        assert_eq!(LocalDate::in_zone(&ts, TimeZone::UTC).to_string(), "1/2/2024");
    }

    #[test]
    fn test_date_follows_time_zone() {
        let ts = Timestamp::from_second(1704164400).unwrap();
        let zone = TimeZone::fixed(jiff::tz::offset(-5));
        assert_eq!(LocalDate::in_zone(&ts, zone).to_string(), "1/1/2024");
    }
}
