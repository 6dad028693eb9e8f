//! Search Box Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Live search input. Every keystroke narrows the view and snaps the
/// pagination back to page 1.
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <input
            type="text"
            class="filter-input"
            placeholder="Search by title or body..."
            prop:value=move || ctx.search_term.get()
            on:input=move |ev| ctx.set_search(event_target_value(&ev))
        />
    }
}
