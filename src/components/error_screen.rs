//! Error Screen Component
//!
//! Full-view replacement shown when the startup fetch fails.

use leptos::prelude::*;

/// Error message plus a Retry control. Retry reloads the whole page,
/// re-running the startup sequence from the loading state.
#[component]
pub fn ErrorScreen(#[prop(into)] message: String) -> impl IntoView {
    let reload = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="error-container">
            <p>"Error: " {message}</p>
            <button on:click=reload>"Retry"</button>
        </div>
    }
}
