//! Reactive panel state: the signals behind the page's controls.

use leptos::prelude::*;
use lightpanel_app::ports::PanelView;

/// One signal per control. `Copy`, so it can be captured by every handler.
#[derive(Debug, Clone, Copy)]
pub struct PanelSignals {
    pub light: RwSignal<bool>,
    pub schedule: RwSignal<bool>,
    pub time_on: RwSignal<String>,
    pub time_off: RwSignal<String>,
    pub times_disabled: RwSignal<bool>,
    pub override_label: RwSignal<String>,
}

impl PanelSignals {
    #[must_use]
    pub fn new() -> Self {
        Self {
            light: RwSignal::new(false),
            schedule: RwSignal::new(false),
            time_on: RwSignal::new(String::new()),
            time_off: RwSignal::new(String::new()),
            times_disabled: RwSignal::new(false),
            override_label: RwSignal::new(String::new()),
        }
    }
}

impl Default for PanelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelView for PanelSignals {
    fn set_light_switch(&self, checked: bool) {
        self.light.set(checked);
    }

    fn set_schedule_switch(&self, checked: bool) {
        self.schedule.set(checked);
    }

    fn time_on(&self) -> String {
        self.time_on.get_untracked()
    }

    fn set_time_on(&self, value: &str) {
        self.time_on.set(value.to_string());
    }

    fn time_off(&self) -> String {
        self.time_off.get_untracked()
    }

    fn set_time_off(&self, value: &str) {
        self.time_off.set(value.to_string());
    }

    fn time_fields_disabled(&self) -> bool {
        self.times_disabled.get_untracked()
    }

    fn set_time_fields_disabled(&self, disabled: bool) {
        self.times_disabled.set(disabled);
    }

    fn set_override_label(&self, text: &str) {
        self.override_label.set(text.to_string());
    }
}
