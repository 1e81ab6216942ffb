use std::{fmt, str::FromStr};

use time::{
    format_description::BorrowedFormatItem, macros::format_description, Duration, OffsetDateTime,
    PrimitiveDateTime,
};

const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

// HTML datetime-local input, with and without seconds.
const INPUT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const INPUT_FORMAT_MINUTES: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// A UTC instant with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc().unix_timestamp())
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.0.checked_add(duration.whole_seconds()).map(Self)
    }

    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        self.0.checked_sub(duration.whole_seconds()).map(Self)
    }

    /// Render the value for a `datetime-local` form input.
    pub fn format_input_value(self) -> String {
        OffsetDateTime::from_unix_timestamp(self.0)
            .ok()
            .and_then(|dt| dt.format(INPUT_FORMAT).ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid date/time")]
pub struct TimestampParseError;

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = PrimitiveDateTime::parse(s, INPUT_FORMAT)
            .or_else(|_| PrimitiveDateTime::parse(s, INPUT_FORMAT_MINUTES))
            .map_err(|_| TimestampParseError)?;
        Ok(Self(parsed.assume_utc().unix_timestamp()))
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.unix_timestamp())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let Ok(dt) = OffsetDateTime::from_unix_timestamp(self.0) else {
            return write!(f, "{}", self.0);
        };
        match dt.format(DISPLAY_FORMAT) {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_seconds() {
        let ts = "2030-01-01T20:00:00".parse::<Timestamp>().unwrap();
        assert_eq!(ts.to_string(), "2030-01-01 20:00:00");
    }

    #[test]
    fn parse_without_seconds() {
        let ts = "2030-01-01T20:00".parse::<Timestamp>().unwrap();
        assert_eq!(ts.to_string(), "2030-01-01 20:00:00");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("tonight".parse::<Timestamp>().is_err());
        assert!("".parse::<Timestamp>().is_err());
    }

    #[test]
    fn ordering_follows_seconds() {
        let earlier = Timestamp::from_secs(1_000);
        let later = Timestamp::from_secs(1_001);
        assert!(earlier < later);
        assert_eq!(earlier, Timestamp::from_secs(1_000));
    }

    #[test]
    fn input_value_round_trip() {
        let ts = "2027-06-15T19:30:00".parse::<Timestamp>().unwrap();
        assert_eq!(ts.format_input_value(), "2027-06-15T19:30:00");
        assert_eq!(ts.format_input_value().parse::<Timestamp>().unwrap(), ts);
    }
}
