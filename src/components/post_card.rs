//! Post Card Component
//!
//! A single post with its favorite toggle, shared by both views.

use leptos::prelude::*;

use crate::models::Post;
use crate::store::{store_toggle_favorite, use_app_store, AppStateStoreFields};

/// Card showing one post's title and body plus a heart glyph. The heart
/// reflects favorite membership and flips it on click.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let store = use_app_store();
    let id = post.id;

    let heart_class = move || {
        if store.favorites().read().contains(&id) {
            "heart-icon liked"
        } else {
            "heart-icon"
        }
    };

    view! {
        <div class="card">
            <h2>{post.title}</h2>
            <p>{post.body}</p>
            <div class=heart_class on:click=move |_| store_toggle_favorite(&store, id)>
                "♥"
            </div>
        </div>
    }
}
