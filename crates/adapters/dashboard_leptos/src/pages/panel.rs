//! The single control page: light switch, schedule switch, on/off times.

use leptos::ev::Event;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lightpanel_app::ports::SystemClock;
use lightpanel_app::services::panel_controller::PanelController;

use crate::api::GlooControlService;
use crate::components::use_toasts;
use crate::view::PanelSignals;

/// Panel page. Syncs once with the controller when mounted; after that only
/// user actions talk to it.
#[component]
pub fn Panel() -> impl IntoView {
    let signals = PanelSignals::new();
    let controller = PanelController::new(
        GlooControlService::same_origin(),
        signals,
        use_toasts(),
        SystemClock,
    );

    let startup = controller.clone();
    spawn_local(async move {
        let _ = startup.refresh_state().await;
    });

    let light_controller = controller.clone();
    let on_light_change = move |ev: Event| {
        let checked = event_target_checked(&ev);
        signals.light.set(checked);
        let ctrl = light_controller.clone();
        spawn_local(async move {
            let _ = ctrl.light_switch_changed(checked).await;
        });
    };

    let on_schedule_change = move |ev: Event| {
        let checked = event_target_checked(&ev);
        signals.schedule.set(checked);
        let ctrl = controller.clone();
        spawn_local(async move {
            let _ = ctrl.schedule_switch_changed(checked).await;
        });
    };

    view! {
        <header class="toolbar">
            <h1>"Lights"</h1>
        </header>
        <ul class="list">
            <li class="list-header">"Manual"</li>
            <li class="list-item">
                <label for="light_switch">"Light"</label>
                <input
                    id="light_switch"
                    type="checkbox"
                    prop:checked=move || signals.light.get()
                    on:change=on_light_change
                />
            </li>
            <li class="list-item">
                <span>"Override"</span>
                <span class="status">{move || signals.override_label.get()}</span>
            </li>
            <li class="list-header">"Schedule"</li>
            <li class="list-item">
                <label for="schedule_switch">"Automatic"</label>
                <input
                    id="schedule_switch"
                    type="checkbox"
                    prop:checked=move || signals.schedule.get()
                    on:change=on_schedule_change
                />
            </li>
            <li class="list-item">
                <label for="time_on">"On at"</label>
                <input
                    id="time_on"
                    name="time_on"
                    type="time"
                    prop:value=move || signals.time_on.get()
                    prop:disabled=move || signals.times_disabled.get()
                    on:input=move |ev| signals.time_on.set(event_target_value(&ev))
                />
            </li>
            <li class="list-item">
                <label for="time_off">"Off at"</label>
                <input
                    id="time_off"
                    name="time_off"
                    type="time"
                    prop:value=move || signals.time_off.get()
                    prop:disabled=move || signals.times_disabled.get()
                    on:input=move |ev| signals.time_off.set(event_target_value(&ev))
                />
            </li>
        </ul>
    }
}
