//! In-memory panel rendered to the terminal.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::time::Duration;

use lightpanel_app::ports::{Notifier, PanelView};

/// Panel controls held in memory; printed once the command has run.
#[derive(Debug, Default)]
pub struct TerminalView {
    light: Cell<bool>,
    schedule: Cell<bool>,
    time_on: RefCell<String>,
    time_off: RefCell<String>,
    times_disabled: Cell<bool>,
    override_label: RefCell<String>,
}

/// The switch-like controls of a [`TerminalView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switches {
    pub light: bool,
    pub schedule: bool,
    pub times_disabled: bool,
}

impl TerminalView {
    pub fn switches(&self) -> Switches {
        Switches {
            light: self.light.get(),
            schedule: self.schedule.get(),
            times_disabled: self.times_disabled.get(),
        }
    }

    /// Put the switches back to a state read earlier with [`switches`](Self::switches).
    pub fn restore(&self, switches: Switches) {
        self.light.set(switches.light);
        self.schedule.set(switches.schedule);
        self.times_disabled.set(switches.times_disabled);
    }
}

impl PanelView for TerminalView {
    fn set_light_switch(&self, checked: bool) {
        self.light.set(checked);
    }

    fn set_schedule_switch(&self, checked: bool) {
        self.schedule.set(checked);
    }

    fn time_on(&self) -> String {
        self.time_on.borrow().clone()
    }

    fn set_time_on(&self, value: &str) {
        value.clone_into(&mut self.time_on.borrow_mut());
    }

    fn time_off(&self) -> String {
        self.time_off.borrow().clone()
    }

    fn set_time_off(&self, value: &str) {
        value.clone_into(&mut self.time_off.borrow_mut());
    }

    fn time_fields_disabled(&self) -> bool {
        self.times_disabled.get()
    }

    fn set_time_fields_disabled(&self, disabled: bool) {
        self.times_disabled.set(disabled);
    }

    fn set_override_label(&self, text: &str) {
        text.clone_into(&mut self.override_label.borrow_mut());
    }
}

fn on_off(checked: bool) -> &'static str {
    if checked { "on" } else { "off" }
}

fn or_blank<'a>(value: &'a str, blank: &'a str) -> &'a str {
    if value.is_empty() { blank } else { value }
}

impl fmt::Display for TerminalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lock = if self.times_disabled.get() { " (locked)" } else { "" };
        writeln!(f, "status:   {}", or_blank(&self.override_label.borrow(), "-"))?;
        writeln!(f, "light:    {}", on_off(self.light.get()))?;
        writeln!(f, "schedule: {}", on_off(self.schedule.get()))?;
        writeln!(f, "on at:    {}{lock}", or_blank(&self.time_on.borrow(), "--:--"))?;
        write!(f, "off at:   {}{lock}", or_blank(&self.time_off.borrow(), "--:--"))
    }
}

/// Prints toasts to stderr. A terminal has no use for the display timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, _timeout: Duration) {
        eprintln!("lightctl: {message}");
    }
}
