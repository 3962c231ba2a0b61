//! View port: the controls of the panel page.
//!
//! Methods take `&self`: views are expected to use interior mutability
//! (reactive signals, `RefCell`, …) since user events and request
//! completions both write to them from the same thread.

/// The panel's controls: two switches, two time fields and a status label.
///
/// Time fields hold whatever text the user typed, in local time. They are
/// empty when no schedule is set.
pub trait PanelView {
    fn set_light_switch(&self, checked: bool);

    fn set_schedule_switch(&self, checked: bool);

    fn time_on(&self) -> String;

    fn set_time_on(&self, value: &str);

    fn time_off(&self) -> String;

    fn set_time_off(&self, value: &str);

    /// Whether both time fields are currently read-only.
    fn time_fields_disabled(&self) -> bool;

    /// Enable or disable both time fields at once.
    fn set_time_fields_disabled(&self, disabled: bool);

    fn set_override_label(&self, text: &str);
}
