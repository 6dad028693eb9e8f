//! Postboard App
//!
//! Top-level component: startup fetch, loading/error/ready states and
//! routing between the two views.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{BrowseView, ErrorScreen, FavoritesView, NavBar};
use crate::context::AppContext;
use crate::store::{store_set_posts, AppState};

/// Startup fetch lifecycle
#[derive(Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready,
    Failed(String),
}

/// Which of the two views is on screen
#[derive(Clone, Copy, PartialEq)]
pub enum Route {
    Browse,
    Favorites,
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    // State
    let (fetch_state, set_fetch_state) = signal(FetchState::Loading);
    let (route, set_route) = signal(Route::Browse);
    let (search_term, set_search_term) = signal(String::new());
    let (current_page, set_current_page) = signal(1usize);

    // Provide context to all children
    provide_context(AppContext::new(
        (search_term, set_search_term),
        (current_page, set_current_page),
    ));

    // Fetch posts once on mount. No automatic retry; recovery is a full
    // page reload from the error screen.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_posts().await {
                Ok(posts) => {
                    web_sys::console::log_1(&format!("[API] Loaded {} posts", posts.len()).into());
                    store_set_posts(&store, posts);
                    set_fetch_state.set(FetchState::Ready);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[API] Fetch failed: {}", err).into());
                    set_fetch_state.set(FetchState::Failed(err.to_string()));
                }
            }
        });
    });

    view! {
        <div class="app">
            {move || match fetch_state.get() {
                FetchState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorScreen message=message /> }.into_any(),
                FetchState::Ready => view! {
                    <NavBar route=route set_route=set_route />
                    {move || match route.get() {
                        Route::Browse => view! { <BrowseView /> }.into_any(),
                        Route::Favorites => view! { <FavoritesView /> }.into_any(),
                    }}
                }
                .into_any(),
            }}
        </div>
    }
}
