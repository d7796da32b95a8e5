//! Weekly time arithmetic.
//!
//! A timetable covers the five teaching days of a week. Times of day are
//! kept at minute precision and combined with the weekday into a single
//! ordinal ("minute of the week") so that slots sort and compare directly.
//!
//! # Serialization
//! - [`Weekday`] reads `"Mon"` or `"Monday"` and writes `"Mon"`.
//! - [`ClockTime`] reads `"HH:MM"` or `"HH:MM:SS"` (seconds are discarded)
//!   and writes `"HH:MM"`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    #[serde(rename = "Mon", alias = "Monday")]
    Monday,
    /// Tuesday.
    #[serde(rename = "Tue", alias = "Tuesday")]
    Tuesday,
    /// Wednesday.
    #[serde(rename = "Wed", alias = "Wednesday")]
    Wednesday,
    /// Thursday.
    #[serde(rename = "Thu", alias = "Thursday")]
    Thursday,
    /// Friday.
    #[serde(rename = "Fri", alias = "Friday")]
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Zero-based position in the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label (`"Mon"` .. `"Fri"`).
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Error returned when a time-of-day string is not valid 24-hour `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day '{0}', expected HH:MM in 24-hour format")]
pub struct ParseClockTimeError(pub String);

/// A time of day at minute precision, `00:00..=23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Creates a time from hours and minutes.
    ///
    /// Returns `None` outside `00:00..=23:59`.
    pub fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        if hours >= 24 || minutes >= 60 {
            return None;
        }
        Some(Self((hours * 60 + minutes) as u16))
    }

    /// Creates a time from minutes since midnight.
    ///
    /// Returns `None` at or past [`MINUTES_PER_DAY`].
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes as u16))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// Hour component.
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    /// Minute component.
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError(s.to_string());
        let mut parts = s.split(':');
        let hours = two_digits(parts.next()).ok_or_else(err)?;
        let minutes = two_digits(parts.next()).ok_or_else(err)?;
        if let Some(seconds) = parts.next() {
            let seconds = two_digits(Some(seconds)).ok_or_else(err)?;
            if seconds >= 60 {
                return Err(err());
            }
        }
        if parts.next().is_some() {
            return Err(err());
        }
        Self::from_hm(hours, minutes).ok_or_else(err)
    }
}

fn two_digits(part: Option<&str>) -> Option<u32> {
    let part = part?;
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordinal of a moment within the week, in minutes since Monday 00:00.
#[inline]
pub fn week_minute(day: Weekday, time: ClockTime) -> u32 {
    day.index() as u32 * MINUTES_PER_DAY + time.minutes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_time() {
        let t: ClockTime = "09:30".parse().unwrap();
        assert_eq!(t.minutes(), 570);
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.to_string(), "09:30");

        let with_seconds: ClockTime = "23:59:00".parse().unwrap();
        assert_eq!(with_seconds.minutes(), 23 * 60 + 59);
    }

    #[test]
    fn test_parse_clock_time_rejects_malformed() {
        for bad in ["24:00", "9:30", "09:60", "0930", "", "ab:cd", "09:30:75", "09:30:00:00"] {
            assert!(bad.parse::<ClockTime>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_week_minute_orders_days_first() {
        let late_monday = week_minute(Weekday::Monday, ClockTime::from_hm(23, 0).unwrap());
        let early_tuesday = week_minute(Weekday::Tuesday, ClockTime::MIDNIGHT);
        assert!(late_monday < early_tuesday);
        assert_eq!(early_tuesday, MINUTES_PER_DAY);
        assert_eq!(week_minute(Weekday::Friday, ClockTime::MIDNIGHT), 4 * MINUTES_PER_DAY);
    }

    #[test]
    fn test_weekday_serde() {
        let d: Weekday = serde_json::from_str("\"Wednesday\"").unwrap();
        assert_eq!(d, Weekday::Wednesday);
        let d: Weekday = serde_json::from_str("\"Thu\"").unwrap();
        assert_eq!(d, Weekday::Thursday);
        assert_eq!(serde_json::to_string(&Weekday::Friday).unwrap(), "\"Fri\"");
        assert!(serde_json::from_str::<Weekday>("\"Sat\"").is_err());
    }

    #[test]
    fn test_clock_time_serde() {
        let t: ClockTime = serde_json::from_str("\"14:05\"").unwrap();
        assert_eq!(t, ClockTime::from_hm(14, 5).unwrap());
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"14:05\"");
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }

    #[test]
    fn test_from_minutes_bounds() {
        assert!(ClockTime::from_minutes(MINUTES_PER_DAY - 1).is_some());
        assert!(ClockTime::from_minutes(MINUTES_PER_DAY).is_none());
    }
}
