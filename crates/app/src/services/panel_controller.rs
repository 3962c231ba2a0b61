//! Panel controller: keeps the panel's controls in sync with the light controller.
//!
//! Toggles are optimistic: the view already shows the user's change when a
//! handler runs, the request is sent, and the view is only touched again if
//! the request fails (rollback). Nothing is retried; every failure ends in a
//! single toast.

use std::time::Duration;

use lightpanel_domain::schedule::ScheduleWindow;
use lightpanel_domain::status::StatusSnapshot;
use lightpanel_domain::switch::SwitchState;
use lightpanel_domain::time::TimeOfDay;
use tracing::{debug, info, warn};

use crate::ports::{Clock, ControlError, ControlRequest, ControlService, Notifier, PanelView};

/// How long the "failed to fetch" toast stays up.
pub const STATUS_TOAST: Duration = Duration::from_millis(1500);

/// How long toasts for failed toggles stay up.
pub const CONTROL_TOAST: Duration = Duration::from_millis(1000);

const FETCH_FAILED: &str = "Failed to fetch the current state";

/// Use-cases behind the panel page.
#[derive(Debug, Clone)]
pub struct PanelController<S, V, N, C> {
    service: S,
    view: V,
    notifier: N,
    clock: C,
}

impl<S, V, N, C> PanelController<S, V, N, C>
where
    S: ControlService,
    V: PanelView,
    N: Notifier,
    C: Clock,
{
    /// Wire a controller from its ports.
    pub fn new(service: S, view: V, notifier: N, clock: C) -> Self {
        Self {
            service,
            view,
            notifier,
            clock,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Probe the controller once and copy its state into the view.
    ///
    /// On failure a toast is shown and the view is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns the [`ControlError`] that caused the toast.
    pub async fn refresh_state(&self) -> Result<StatusSnapshot, ControlError> {
        let result = match self.service.send(ControlRequest::Status).await {
            Ok(reply) => reply.into_snapshot(),
            Err(err) => Err(err),
        };

        match result {
            Ok(snapshot) => {
                debug!(%snapshot, "status probe succeeded");
                self.apply(&snapshot);
                Ok(snapshot)
            }
            Err(err) => {
                warn!(error = %err, "status probe failed");
                self.notifier.notify(FETCH_FAILED, STATUS_TOAST);
                Err(err)
            }
        }
    }

    fn apply(&self, snapshot: &StatusSnapshot) {
        let schedule_on = snapshot.schedule.is_on();
        let (on, off) = match snapshot.window.to_local(self.clock.utc_offset()) {
            Some(local) => (local.on.to_string(), local.off.to_string()),
            None => (String::new(), String::new()),
        };

        self.view.set_light_switch(snapshot.light.is_on());
        self.view.set_schedule_switch(schedule_on);
        self.view.set_time_on(&on);
        self.view.set_time_off(&off);
        self.view.set_time_fields_disabled(schedule_on);
        self.view.set_override_label(&snapshot.override_label);
    }

    /// Handle the light switch after the user flipped it to `checked`.
    ///
    /// # Errors
    ///
    /// Returns the [`ControlError`] after rolling the switch back.
    pub async fn light_switch_changed(&self, checked: bool) -> Result<(), ControlError> {
        let state = SwitchState::from(checked);
        let result = self.command(ControlRequest::Light(state)).await;

        if let Err(err) = &result {
            warn!(error = %err, %state, "light toggle failed, rolling back");
            self.notifier
                .notify(&format!("Failed to turn the lights {state}"), CONTROL_TOAST);
            self.view.set_light_switch(!checked);
        } else {
            info!(%state, "light toggled");
        }
        result
    }

    /// Handle the schedule switch after the user flipped it to `checked`.
    ///
    /// Enabling only goes through when both time fields hold valid, distinct
    /// times. Otherwise the schedule is disabled and the switch forced off.
    ///
    /// # Errors
    ///
    /// Returns the [`ControlError`] after restoring the switch and time fields.
    pub async fn schedule_switch_changed(&self, checked: bool) -> Result<(), ControlError> {
        let prior_disabled = self.view.time_fields_disabled();

        let request = match self.requested_window(checked) {
            Some(window) => ControlRequest::ScheduleOn(window.to_utc(self.clock.utc_offset())),
            None => {
                self.view.set_schedule_switch(false);
                ControlRequest::ScheduleOff
            }
        };
        let enabling = matches!(request, ControlRequest::ScheduleOn(_));
        self.view.set_time_fields_disabled(enabling);

        let result = self.command(request).await;
        if let Err(err) = &result {
            let direction = if enabling { "enable" } else { "disable" };
            warn!(error = %err, direction, "schedule toggle failed, rolling back");
            self.notifier.notify(
                &format!("Failed to {direction} the schedule"),
                CONTROL_TOAST,
            );
            self.view.set_schedule_switch(!checked);
            self.view.set_time_fields_disabled(prior_disabled);
        } else {
            info!(enabled = enabling, "schedule toggled");
        }
        result
    }

    /// The local window to enable, or `None` when the schedule must go off.
    fn requested_window(&self, checked: bool) -> Option<ScheduleWindow> {
        if !checked {
            return None;
        }
        let on = self.view.time_on().parse::<TimeOfDay>();
        let off = self.view.time_off().parse::<TimeOfDay>();
        match (on, off) {
            (Ok(on), Ok(off)) => Some(ScheduleWindow::new(on, off)).filter(|w| !w.is_empty()),
            (on, off) => {
                debug!(on = ?on.err(), off = ?off.err(), "time fields unusable, disabling schedule");
                None
            }
        }
    }

    async fn command(&self, request: ControlRequest) -> Result<(), ControlError> {
        debug!(%request, "sending control request");
        self.service.send(request).await?.into_ack()
    }
}
