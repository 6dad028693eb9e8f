//! Favorites View Component
//!
//! Unpaginated grid of favorited posts, in source order.

use leptos::prelude::*;

use crate::components::PostCard;
use crate::store::{favorite_posts, use_app_store, AppStateStoreFields};

/// Favorites view. Hearts here are always lit; clicking one
/// un-favorites the post and drops it from the grid.
#[component]
pub fn FavoritesView() -> impl IntoView {
    let store = use_app_store();

    let favorites = Memo::new(move |_| {
        favorite_posts(&store.posts().read(), &store.favorites().read())
    });

    view! {
        <div class="favorites-view">
            <h1>"Favorites"</h1>

            <Show
                when=move || !favorites.get().is_empty()
                fallback=|| view! { <p class="empty-note">"No favorites selected."</p> }
            >
                <div class="card-container">
                    <For
                        each=move || favorites.get()
                        key=|post| post.id
                        children=move |post| view! { <PostCard post=post /> }
                    />
                </div>
            </Show>
        </div>
    }
}
