//! Error types raised while parsing domain values.

/// Failure to read an `HH:MM` time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("time value is empty")]
    Empty,

    #[error("time value {0:?} is not in HH:MM form")]
    Malformed(String),

    #[error("time {hour}:{minute} is out of range")]
    OutOfRange { hour: u32, minute: u32 },
}

/// Failure to read an `on` / `off` switch state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("switch state {0:?} is neither \"on\" nor \"off\"")]
pub struct SwitchParseError(pub String);

/// Failure to read the slash-delimited status snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusParseError {
    #[error("status snapshot has {found} fields, expected 5")]
    FieldCount { found: usize },

    #[error("invalid {field} field")]
    Switch {
        field: &'static str,
        #[source]
        source: SwitchParseError,
    },

    #[error("invalid {field} field")]
    Time {
        field: &'static str,
        #[source]
        source: TimeParseError,
    },
}
