//! Status snapshot: the controller state reported by the status probe.
//!
//! On the wire the snapshot is a single slash-delimited string carried in the
//! reason phrase of the probe response:
//!
//! ```text
//! <override>/<light>/<schedule>/<on_utc>/<off_utc>
//! auto/on/off/08:00/20:00
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::StatusParseError;
use crate::schedule::ScheduleWindow;
use crate::switch::SwitchState;
use crate::time::TimeOfDay;

/// Parsed status snapshot. Schedule bounds are in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Free-text description of who set the current state (e.g. `auto`).
    pub override_label: String,
    pub light: SwitchState,
    pub schedule: SwitchState,
    pub window: ScheduleWindow,
}

impl FromStr for StatusSnapshot {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('/').collect();
        let &[override_label, light, schedule, on, off] = fields.as_slice() else {
            return Err(StatusParseError::FieldCount {
                found: fields.len(),
            });
        };

        let switch = |field, value: &str| {
            value
                .parse::<SwitchState>()
                .map_err(|source| StatusParseError::Switch { field, source })
        };
        let time = |field, value: &str| {
            value
                .parse::<TimeOfDay>()
                .map_err(|source| StatusParseError::Time { field, source })
        };

        Ok(Self {
            override_label: override_label.to_string(),
            light: switch("light", light)?,
            schedule: switch("schedule", schedule)?,
            window: ScheduleWindow::new(time("on_time", on)?, time("off_time", off)?),
        })
    }
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.override_label, self.light, self.schedule, self.window.on, self.window.off
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SwitchParseError, TimeParseError};

    #[test]
    fn should_parse_well_formed_snapshot() {
        let snapshot: StatusSnapshot = "auto/on/off/08:00/20:00".parse().unwrap();
        assert_eq!(snapshot.override_label, "auto");
        assert_eq!(snapshot.light, SwitchState::On);
        assert_eq!(snapshot.schedule, SwitchState::Off);
        assert_eq!(snapshot.window.on, TimeOfDay::new(8, 0).unwrap());
        assert_eq!(snapshot.window.off, TimeOfDay::new(20, 0).unwrap());
    }

    #[test]
    fn should_keep_override_text_verbatim() {
        let snapshot: StatusSnapshot = "manual switch/off/on/06:30/07:45".parse().unwrap();
        assert_eq!(snapshot.override_label, "manual switch");
        assert!(snapshot.schedule.is_on());
    }

    #[test]
    fn should_keep_whitespace_around_override_text() {
        let snapshot: StatusSnapshot = " manual /on/off/08:00/20:00".parse().unwrap();
        assert_eq!(snapshot.override_label, " manual ");
    }

    #[test]
    fn should_accept_empty_override_text() {
        let snapshot: StatusSnapshot = "/off/off/00:00/00:00".parse().unwrap();
        assert_eq!(snapshot.override_label, "");
        assert!(snapshot.window.is_empty());
    }

    #[test]
    fn should_reject_too_few_fields() {
        assert_eq!(
            "auto/on/off/08:00".parse::<StatusSnapshot>(),
            Err(StatusParseError::FieldCount { found: 4 })
        );
    }

    #[test]
    fn should_reject_too_many_fields() {
        assert_eq!(
            "a/b/on/off/08:00/20:00".parse::<StatusSnapshot>(),
            Err(StatusParseError::FieldCount { found: 6 })
        );
    }

    #[test]
    fn should_reject_reason_phrase_without_slashes() {
        assert_eq!(
            "OK".parse::<StatusSnapshot>(),
            Err(StatusParseError::FieldCount { found: 1 })
        );
    }

    #[test]
    fn should_reject_unknown_switch_value() {
        assert_eq!(
            "auto/maybe/off/08:00/20:00".parse::<StatusSnapshot>(),
            Err(StatusParseError::Switch {
                field: "light",
                source: SwitchParseError("maybe".to_string()),
            })
        );
    }

    #[test]
    fn should_reject_invalid_time() {
        assert_eq!(
            "auto/on/on/25:00/20:00".parse::<StatusSnapshot>(),
            Err(StatusParseError::Time {
                field: "on_time",
                source: TimeParseError::OutOfRange {
                    hour: 25,
                    minute: 0
                },
            })
        );
    }

    #[test]
    fn should_display_wire_format() {
        let raw = "off/on/on/21:15/05:00";
        let snapshot: StatusSnapshot = raw.parse().unwrap();
        assert_eq!(snapshot.to_string(), raw);
    }
}
