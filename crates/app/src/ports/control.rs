//! Control port: the light controller's HEAD-only HTTP API.
//!
//! | Request | Path |
//! |---|---|
//! | [`ControlRequest::Status`] | `/status` |
//! | [`ControlRequest::Light`] | `/on`, `/off` |
//! | [`ControlRequest::ScheduleOn`] | `/schedule/on?on=HH:MM&off=HH:MM` |
//! | [`ControlRequest::ScheduleOff`] | `/schedule/off` |
//!
//! Every call is a `HEAD` without a body. The status probe answers with the
//! non-standard code 299 and carries the snapshot in its reason phrase.

use std::fmt;
use std::future::Future;

use lightpanel_domain::error::StatusParseError;
use lightpanel_domain::schedule::ScheduleWindow;
use lightpanel_domain::status::StatusSnapshot;
use lightpanel_domain::switch::SwitchState;

/// Status code of a successful status probe.
pub const STATUS_PROBE_OK: u16 = 299;

/// One call against the light controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest {
    /// Read the current state without changing it.
    Status,
    /// Turn the light on or off.
    Light(SwitchState),
    /// Enable the schedule. Bounds must already be in UTC.
    ScheduleOn(ScheduleWindow),
    /// Disable the schedule.
    ScheduleOff,
}

impl ControlRequest {
    /// Path and query of the request, relative to the controller's base URL.
    ///
    /// Times are written as raw `HH:MM`; the controller does not decode
    /// percent-escapes in its query string.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Status => "/status".to_string(),
            Self::Light(state) => format!("/{state}"),
            Self::ScheduleOn(window) => {
                format!("/schedule/on?on={}&off={}", window.on, window.off)
            }
            Self::ScheduleOff => "/schedule/off".to_string(),
        }
    }
}

impl fmt::Display for ControlRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HEAD {}", self.path())
    }
}

/// Status line of one completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    /// Reason phrase exactly as sent by the controller.
    pub reason: String,
}

impl Reply {
    #[must_use]
    pub fn new(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }

    /// Whether a control call completed without an HTTP error status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status < 400
    }

    /// Interpret this reply as the answer to a status probe.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::UnexpectedStatus`] for anything but 299 and
    /// [`ControlError::MalformedStatus`] when the reason phrase is not a
    /// valid snapshot.
    pub fn into_snapshot(self) -> Result<StatusSnapshot, ControlError> {
        if self.status != STATUS_PROBE_OK {
            return Err(ControlError::UnexpectedStatus(self.status));
        }
        Ok(self.reason.parse()?)
    }

    /// Interpret this reply as the answer to a control call.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Rejected`] for HTTP error statuses.
    pub fn into_ack(self) -> Result<(), ControlError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ControlError::Rejected(self.status))
        }
    }
}

/// Failure of a call against the light controller.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// The exchange did not complete (DNS, connect, reset, timeout, …).
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The status probe answered with something other than 299.
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    /// A control call answered with an HTTP error status.
    #[error("request rejected with status {0}")]
    Rejected(u16),

    /// The status probe answered 299 but its snapshot could not be parsed.
    #[error("malformed status snapshot")]
    MalformedStatus(#[from] StatusParseError),
}

impl ControlError {
    /// Wrap any transport-level error.
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(err.into())
    }
}

/// Sends requests to the light controller.
///
/// Implementations resolve with a [`Reply`] for every exchange that produced
/// a status line, including HTTP error statuses, and with
/// [`ControlError::Transport`] otherwise. Interpreting the status is left to
/// the caller.
pub trait ControlService {
    fn send(&self, request: ControlRequest) -> impl Future<Output = Result<Reply, ControlError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightpanel_domain::time::TimeOfDay;

    fn window(on: &str, off: &str) -> ScheduleWindow {
        ScheduleWindow::new(on.parse::<TimeOfDay>().unwrap(), off.parse().unwrap())
    }

    #[test]
    fn should_render_status_path() {
        assert_eq!(ControlRequest::Status.path(), "/status");
    }

    #[test]
    fn should_render_light_paths() {
        assert_eq!(ControlRequest::Light(SwitchState::On).path(), "/on");
        assert_eq!(ControlRequest::Light(SwitchState::Off).path(), "/off");
    }

    #[test]
    fn should_render_schedule_on_with_raw_times() {
        let request = ControlRequest::ScheduleOn(window("06:30", "22:05"));
        assert_eq!(request.path(), "/schedule/on?on=06:30&off=22:05");
    }

    #[test]
    fn should_render_schedule_off_path() {
        assert_eq!(ControlRequest::ScheduleOff.path(), "/schedule/off");
    }

    #[test]
    fn should_display_method_and_path() {
        assert_eq!(ControlRequest::Status.to_string(), "HEAD /status");
    }

    #[test]
    fn should_decode_snapshot_from_299_reply() {
        let snapshot = Reply::new(299, "auto/on/off/08:00/20:00")
            .into_snapshot()
            .unwrap();
        assert_eq!(snapshot.override_label, "auto");
        assert!(snapshot.light.is_on());
    }

    #[test]
    fn should_reject_probe_reply_with_200() {
        let err = Reply::new(200, "OK").into_snapshot().unwrap_err();
        assert!(matches!(err, ControlError::UnexpectedStatus(200)));
    }

    #[test]
    fn should_reject_probe_reply_with_garbled_reason() {
        let err = Reply::new(299, "auto/on").into_snapshot().unwrap_err();
        assert!(matches!(
            err,
            ControlError::MalformedStatus(StatusParseError::FieldCount { found: 2 })
        ));
    }

    #[test]
    fn should_ack_non_error_statuses() {
        assert!(Reply::new(200, "OK").into_ack().is_ok());
        assert!(Reply::new(204, "No Content").into_ack().is_ok());
        assert!(Reply::new(299, "").into_ack().is_ok());
    }

    #[test]
    fn should_reject_error_statuses() {
        assert!(matches!(
            Reply::new(400, "Bad Request").into_ack(),
            Err(ControlError::Rejected(400))
        ));
        assert!(matches!(
            Reply::new(503, "Service Unavailable").into_ack(),
            Err(ControlError::Rejected(503))
        ));
    }

    #[test]
    fn should_wrap_transport_errors() {
        let err = ControlError::transport("connection refused");
        assert_eq!(err.to_string(), "transport error");
        assert_eq!(
            std::error::Error::source(&err).unwrap().to_string(),
            "connection refused"
        );
    }
}
