//! # lightctl: light panel on the command line
//!
//! Composition root that wires the HTTP adapter into the panel controller.
//!
//! ## Responsibilities
//! - Parse CLI arguments and load configuration (file, env vars, flags)
//! - Initialise logging
//! - Construct the `ureq` control service, the terminal view and notifier
//! - Run one panel interaction: initial sync, then the requested toggle
//! - Print the resulting panel and exit non-zero if anything failed
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod cli;
mod config;
mod terminal;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lightpanel_adapter_http_ureq::UreqControlService;
use lightpanel_app::ports::{Clock, ControlError, ControlService, Notifier, PanelView, SystemClock};
use lightpanel_app::services::panel_controller::PanelController;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, ScheduleCommand};
use crate::config::Config;
use crate::terminal::{TerminalNotifier, TerminalView};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(url) = cli.url {
        config.controller.base_url = url;
        config.validate().context("checking --url")?;
    }

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(url = %config.controller.base_url, "using light controller");

    let controller = PanelController::new(
        UreqControlService::new(&config.controller),
        TerminalView::default(),
        TerminalNotifier,
        SystemClock,
    );

    let outcome = run(&controller, cli.command).await;
    println!("{}", controller.view());

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Sync the panel once, then apply `command` the way a user would: edit the
/// controls first, then let the controller react to the change.
///
/// The command may ask for the state the panel already shows, so a failure
/// puts the switches back to what they were before the edit instead of
/// trusting the controller's flip-back.
async fn run<S, N, C>(
    controller: &PanelController<S, TerminalView, N, C>,
    command: Command,
) -> Result<(), ControlError>
where
    S: ControlService,
    N: Notifier,
    C: Clock,
{
    let probe = controller.refresh_state().await.map(drop);
    let view = controller.view();
    let before = view.switches();

    let action = match command {
        Command::Status => Ok(()),
        Command::Light { state } => {
            view.set_light_switch(state.is_on());
            controller.light_switch_changed(state.is_on()).await
        }
        Command::Schedule(ScheduleCommand::On { on, off }) => {
            view.set_time_on(&on.to_string());
            view.set_time_off(&off.to_string());
            view.set_schedule_switch(true);
            controller.schedule_switch_changed(true).await
        }
        Command::Schedule(ScheduleCommand::Off) => {
            view.set_schedule_switch(false);
            controller.schedule_switch_changed(false).await
        }
    };
    if action.is_err() {
        view.restore(before);
    }

    probe.and(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::future::Future;

    use lightpanel_app::ports::{ControlRequest, FixedClock, Reply};
    use lightpanel_domain::switch::SwitchState;

    use crate::terminal::Switches;

    #[derive(Default)]
    struct ScriptedController(RefCell<VecDeque<(u16, &'static str)>>);

    impl ScriptedController {
        fn replying(replies: &[(u16, &'static str)]) -> Self {
            Self(RefCell::new(replies.iter().copied().collect()))
        }
    }

    impl ControlService for ScriptedController {
        fn send(&self, _request: ControlRequest) -> impl Future<Output = Result<Reply, ControlError>> {
            let (status, reason) = self.0.borrow_mut().pop_front().unwrap_or((200, "OK"));
            async move { Ok(Reply::new(status, reason)) }
        }
    }

    fn controller(
        replies: &[(u16, &'static str)],
    ) -> PanelController<ScriptedController, TerminalView, TerminalNotifier, FixedClock> {
        PanelController::new(
            ScriptedController::replying(replies),
            TerminalView::default(),
            TerminalNotifier,
            FixedClock::utc(),
        )
    }

    #[tokio::test]
    async fn should_keep_light_on_when_repeated_on_is_rejected() {
        let ctrl = controller(&[(299, "auto/on/off/08:00/20:00"), (500, "Internal Server Error")]);

        let result = run(&ctrl, Command::Light { state: SwitchState::On }).await;

        assert!(matches!(result, Err(ControlError::Rejected(500))));
        assert!(ctrl.view().switches().light);
        assert!(ctrl.view().to_string().contains("light:    on"));
    }

    #[tokio::test]
    async fn should_roll_back_flipped_light_when_rejected() {
        let ctrl = controller(&[(299, "auto/off/off/08:00/20:00"), (500, "Internal Server Error")]);

        assert!(run(&ctrl, Command::Light { state: SwitchState::On }).await.is_err());

        assert!(!ctrl.view().switches().light);
    }

    #[tokio::test]
    async fn should_keep_schedule_locked_when_repeated_enable_fails() {
        let ctrl = controller(&[(299, "auto/on/on/08:00/20:00"), (500, "Internal Server Error")]);
        let command = Command::Schedule(ScheduleCommand::On {
            on: "07:00".parse().unwrap(),
            off: "21:00".parse().unwrap(),
        });

        assert!(run(&ctrl, command).await.is_err());

        assert_eq!(
            ctrl.view().switches(),
            Switches {
                light: true,
                schedule: true,
                times_disabled: true,
            }
        );
    }

    #[tokio::test]
    async fn should_apply_light_command_after_sync() {
        let ctrl = controller(&[(299, "auto/off/off/08:00/20:00"), (200, "OK")]);

        run(&ctrl, Command::Light { state: SwitchState::On }).await.unwrap();

        assert!(ctrl.view().switches().light);
    }
}
