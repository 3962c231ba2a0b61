use leptos::prelude::*;

pub mod api;
mod components;
mod pages;
pub mod view;

use components::ToastContainer;
use pages::Panel;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastContainer>
            <main>
                <Panel/>
            </main>
        </ToastContainer>
    }
}
