//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use std::collections::HashSet;

use crate::models::Post;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Fetched posts, in response order. Written once, read-only after.
    pub posts: Vec<Post>,
    /// Ids the user has marked as favorites
    pub favorites: HashSet<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Populate the store with the fetched collection
pub fn store_set_posts(store: &AppStore, posts: Vec<Post>) {
    *store.posts().write() = posts;
}

/// Flip favorite membership for a post id
pub fn store_toggle_favorite(store: &AppStore, id: u32) {
    toggle_id(&mut store.favorites().write(), id);
}

/// Membership flip: remove the id if present, add it otherwise
pub fn toggle_id(favorites: &mut HashSet<u32>, id: u32) {
    if !favorites.remove(&id) {
        favorites.insert(id);
    }
}

/// Favorited posts in source order
pub fn favorite_posts(posts: &[Post], favorites: &HashSet<u32>) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| favorites.contains(&post.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;

    fn make_post(id: u32) -> Post {
        Post {
            id,
            title: format!("Post {}", id),
            body: format!("Body {}", id),
            user_id: 1,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = HashSet::new();

        toggle_id(&mut favorites, 7);
        assert!(favorites.contains(&7));

        toggle_id(&mut favorites, 7);
        assert!(!favorites.contains(&7));
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let mut favorites: HashSet<u32> = [1, 2, 3].into_iter().collect();
        let before = favorites.clone();

        toggle_id(&mut favorites, 2);
        toggle_id(&mut favorites, 2);

        assert_eq!(favorites, before);
    }

    #[test]
    fn test_favorite_posts_keeps_source_order() {
        let posts: Vec<Post> = (1..=6).map(make_post).collect();
        let favorites: HashSet<u32> = [5, 1, 3].into_iter().collect();

        let shown = favorite_posts(&posts, &favorites);

        assert_eq!(shown.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_favorite_posts_empty_set_shows_nothing() {
        let posts: Vec<Post> = (1..=3).map(make_post).collect();

        assert!(favorite_posts(&posts, &HashSet::new()).is_empty());
    }
}
