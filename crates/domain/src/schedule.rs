//! Schedule window: the daily on/off bounds of the automatic schedule.

use chrono::FixedOffset;

use crate::time::TimeOfDay;

/// A daily window: the light is switched on at `on` and off at `off`.
///
/// A window whose bounds are equal has zero width and is treated as
/// "no schedule" everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleWindow {
    pub on: TimeOfDay,
    pub off: TimeOfDay,
}

impl ScheduleWindow {
    #[must_use]
    pub fn new(on: TimeOfDay, off: TimeOfDay) -> Self {
        Self { on, off }
    }

    /// Whether the window has zero width (`on == off`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.on == self.off
    }

    /// Convert both bounds from local time at `offset` to UTC.
    #[must_use]
    pub fn to_utc(self, offset: FixedOffset) -> Self {
        Self::new(self.on.to_utc(offset), self.off.to_utc(offset))
    }

    /// Convert both bounds from UTC to local time at `offset`.
    ///
    /// Returns `None` for an empty window, which callers display as blank
    /// time fields rather than as a formatted time.
    #[must_use]
    pub fn to_local(self, offset: FixedOffset) -> Option<Self> {
        (!self.is_empty()).then(|| Self::new(self.on.to_local(offset), self.off.to_local(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(on: &str, off: &str) -> ScheduleWindow {
        ScheduleWindow::new(on.parse().unwrap(), off.parse().unwrap())
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn should_be_empty_when_bounds_are_equal() {
        assert!(window("08:00", "08:00").is_empty());
        assert!(!window("08:00", "20:00").is_empty());
    }

    #[test]
    fn should_convert_to_local_at_zero_offset() {
        assert_eq!(
            window("08:00", "20:00").to_local(utc()),
            Some(window("08:00", "20:00"))
        );
    }

    #[test]
    fn should_return_none_for_empty_window() {
        assert_eq!(window("08:00", "08:00").to_local(utc()), None);
        assert_eq!(window("00:00", "00:00").to_local(utc()), None);
    }

    #[test]
    fn should_keep_equal_minutes_and_hours_within_one_bound() {
        assert_eq!(
            window("08:08", "20:00").to_local(utc()),
            Some(window("08:08", "20:00"))
        );
    }

    #[test]
    fn should_shift_both_bounds_to_utc() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(window("00:30", "07:00").to_utc(cet), window("23:30", "06:00"));
    }

    #[test]
    fn should_roundtrip_non_empty_window() {
        let offset = FixedOffset::west_opt(4 * 3600).unwrap();
        let local = window("18:00", "23:30");
        assert_eq!(local.to_utc(offset).to_local(offset), Some(local));
    }
}
