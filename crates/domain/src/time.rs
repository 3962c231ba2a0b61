//! Time-of-day values and local/UTC conversion.
//!
//! Conversion only ever uses a fixed UTC offset: the one implied by the local
//! clock at the moment of conversion. There is no timezone database, so a
//! value converted on either side of a DST change may land an hour apart.

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, Local, NaiveTime, TimeDelta, Timelike};

use crate::error::TimeParseError;

/// An `HH:MM` wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: Self = Self(NaiveTime::MIN);

    /// Build a time of day from an hour (0-23) and a minute (0-59).
    ///
    /// # Errors
    ///
    /// Returns [`TimeParseError::OutOfRange`] when either component is too large.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or(TimeParseError::OutOfRange { hour, minute })
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Interpret `self` as local wall-clock time at `offset` and return the
    /// matching UTC time. Carries across midnight are dropped.
    #[must_use]
    pub fn to_utc(self, offset: FixedOffset) -> Self {
        self.shift(-offset_minutes(offset))
    }

    /// Interpret `self` as UTC and return the wall-clock time at `offset`.
    #[must_use]
    pub fn to_local(self, offset: FixedOffset) -> Self {
        self.shift(offset_minutes(offset))
    }

    fn shift(self, minutes: i64) -> Self {
        let (time, _days) = self.0.overflowing_add_signed(TimeDelta::minutes(minutes));
        Self(time)
    }
}

/// Offsets are applied in whole minutes so that conversions stay exact inverses.
fn offset_minutes(offset: FixedOffset) -> i64 {
    i64::from(offset.local_minus_utc() / 60)
}

/// Return the UTC offset of the local clock right now.
#[must_use]
pub fn local_offset() -> FixedOffset {
    *Local::now().offset()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeParseError::Empty);
        }
        let malformed = || TimeParseError::Malformed(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(malformed)?;
        let digits = |part: &str, max_len: usize| {
            (!part.is_empty() && part.len() <= max_len && part.bytes().all(|b| b.is_ascii_digit()))
                .then(|| part.parse::<u32>().ok())
                .flatten()
        };
        let hour = digits(hour, 2).ok_or_else(malformed)?;
        let minute = (minute.len() == 2)
            .then(|| digits(minute, 2))
            .flatten()
            .ok_or_else(malformed)?;

        Self::new(hour, minute)
    }
}
