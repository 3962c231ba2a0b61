//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lightpanel_domain::switch::SwitchState;
use lightpanel_domain::time::TimeOfDay;

/// Control a remote light from the terminal.
///
/// Every command first reads the controller's state, then applies the
/// requested change the same way the panel page would, and prints the
/// resulting panel. Times are local.
#[derive(Debug, Parser)]
#[command(name = "lightctl", version)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./lightpanel.toml).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Controller base URL, overriding the configuration.
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current state.
    Status,
    /// Turn the light on or off.
    Light {
        /// `on` or `off`.
        state: SwitchState,
    },
    /// Enable or disable the daily schedule.
    #[command(subcommand)]
    Schedule(ScheduleCommand),
}

#[derive(Debug, Subcommand)]
pub enum ScheduleCommand {
    /// Enable the schedule between two local times (HH:MM).
    On { on: TimeOfDay, off: TimeOfDay },
    /// Disable the schedule.
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lightctl").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn should_parse_status() {
        assert!(matches!(parse(&["status"]).command, Command::Status));
    }

    #[test]
    fn should_parse_light_state() {
        assert!(matches!(
            parse(&["light", "on"]).command,
            Command::Light {
                state: SwitchState::On
            }
        ));
    }

    #[test]
    fn should_parse_schedule_times() {
        let cli = parse(&["schedule", "on", "07:30", "22:00"]);
        let Command::Schedule(ScheduleCommand::On { on, off }) = cli.command else {
            panic!("expected schedule on");
        };
        assert_eq!(on.to_string(), "07:30");
        assert_eq!(off.to_string(), "22:00");
    }

    #[test]
    fn should_accept_global_url_after_subcommand() {
        let cli = parse(&["schedule", "off", "--url", "http://10.0.0.2"]);
        assert_eq!(cli.url.as_deref(), Some("http://10.0.0.2"));
        assert!(matches!(cli.command, Command::Schedule(ScheduleCommand::Off)));
    }

    #[test]
    fn should_reject_invalid_time() {
        let result = Cli::try_parse_from(["lightctl", "schedule", "on", "25:00", "22:00"]);
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_unknown_light_state() {
        assert!(Cli::try_parse_from(["lightctl", "light", "dim"]).is_err());
    }
}
