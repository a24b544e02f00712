use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::CoreError;

/// Clock abstracts access to the current timestamp so callers remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Time zone used to map instants onto the consumer's calendar days.
///
/// No device-local variant: the zone always comes from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarZone {
    #[default]
    Utc,
    Fixed(FixedOffset),
    Named(Tz),
}

impl CalendarZone {
    /// Parses `UTC`, a `+HH:MM` / `-HHMM` offset, or an IANA zone name.
    pub fn parse(value: &str) -> Result<CalendarZone, CoreError> {
        let trimmed = value.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("utc")
            || trimmed.eq_ignore_ascii_case("z")
        {
            return Ok(CalendarZone::Utc);
        }
        if trimmed.starts_with('+') || trimmed.starts_with('-') {
            return parse_offset(trimmed)
                .map(CalendarZone::Fixed)
                .ok_or_else(|| CoreError::InvalidTimeZone(trimmed.to_string()));
        }
        trimmed
            .parse::<Tz>()
            .map(CalendarZone::Named)
            .map_err(|_| CoreError::InvalidTimeZone(trimmed.to_string()))
    }

    /// Calendar day of `instant` in this zone.
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            CalendarZone::Utc => instant.date_naive(),
            CalendarZone::Fixed(offset) => instant.with_timezone(offset).date_naive(),
            CalendarZone::Named(tz) => instant.with_timezone(tz).date_naive(),
        }
    }
}

impl FromStr for CalendarZone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarZone::parse(s)
    }
}

impl fmt::Display for CalendarZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarZone::Utc => f.write_str("UTC"),
            CalendarZone::Fixed(offset) => write!(f, "{offset}"),
            CalendarZone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, digits) = match raw.split_at(1) {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };
    let compact: String = digits.chars().filter(|ch| *ch != ':').collect();
    if !compact.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match compact.len() {
        2 => (compact.parse::<i32>().ok()?, 0),
        4 => (
            compact[..2].parse::<i32>().ok()?,
            compact[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
