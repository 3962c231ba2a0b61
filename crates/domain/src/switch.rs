//! Switch state: the `on` / `off` value used for the light and the schedule.

use std::fmt;
use std::str::FromStr;

use crate::error::SwitchParseError;

/// Binary state of the light or of the automatic schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwitchState {
    On,
    #[default]
    Off,
}

impl SwitchState {
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Wire name, as used in the status snapshot and in `/on` / `/off`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl From<bool> for SwitchState {
    fn from(checked: bool) -> Self {
        if checked { Self::On } else { Self::Off }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwitchState {
    type Err = SwitchParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            other => Err(SwitchParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_wire_names() {
        assert_eq!("on".parse::<SwitchState>(), Ok(SwitchState::On));
        assert_eq!("off".parse::<SwitchState>(), Ok(SwitchState::Off));
    }

    #[test]
    fn should_reject_other_values() {
        assert_eq!(
            "ON".parse::<SwitchState>(),
            Err(SwitchParseError("ON".to_string()))
        );
        assert!("".parse::<SwitchState>().is_err());
    }

    #[test]
    fn should_map_checkbox_state() {
        assert_eq!(SwitchState::from(true), SwitchState::On);
        assert_eq!(SwitchState::from(false), SwitchState::Off);
        assert!(SwitchState::On.is_on());
        assert!(!SwitchState::Off.is_on());
    }

    #[test]
    fn should_default_to_off() {
        assert_eq!(SwitchState::default(), SwitchState::Off);
    }

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(SwitchState::On.to_string(), "on");
        assert_eq!(SwitchState::Off.to_string(), "off");
    }
}
