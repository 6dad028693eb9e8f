//! Navigation Bar Component
//!
//! Two links switching between the browse and favorites views.

use leptos::prelude::*;

use crate::app::Route;

/// Top navigation bar
#[component]
pub fn NavBar(route: ReadSignal<Route>, set_route: WriteSignal<Route>) -> impl IntoView {
    let link_class = move |target: Route| {
        if route.get() == target {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="nav-bar">
            <button
                class=move || link_class(Route::Browse)
                on:click=move |_| set_route.set(Route::Browse)
            >
                "Home"
            </button>
            <button
                class=move || link_class(Route::Favorites)
                on:click=move |_| set_route.set(Route::Favorites)
            >
                "Favorites"
            </button>
        </nav>
    }
}
