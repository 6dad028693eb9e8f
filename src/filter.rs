//! Search Filtering
//!
//! Helper functions deriving the filtered view from the full collection.

use crate::models::Post;

/// Posts whose title or body contains `term` as a case-insensitive
/// substring. An empty term matches the whole collection.
pub fn filter_posts(posts: &[Post], term: &str) -> Vec<Post> {
    if term.is_empty() {
        return posts.to_vec();
    }
    let needle = term.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.body.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;

    fn make_post(id: u32, title: &str, body: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            body: body.to_string(),
            user_id: 1,
        }
    }

    #[test]
    fn test_empty_term_matches_all() {
        let posts = vec![
            make_post(1, "alpha", "one"),
            make_post(2, "beta", "two"),
        ];

        let filtered = filter_posts(&posts, "");

        assert_eq!(filtered, posts);
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        let posts = vec![
            make_post(1, "Quia est esse", "lorem"),
            make_post(2, "beta", "lorem"),
        ];

        let filtered = filter_posts(&posts, "QUIA");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_matches_body() {
        let posts = vec![
            make_post(1, "alpha", "nothing here"),
            make_post(2, "beta", "contains Quia somewhere"),
        ];

        let filtered = filter_posts(&posts, "quia");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_excluded_posts_do_not_match() {
        let posts = vec![
            make_post(1, "alpha", "one"),
            make_post(2, "beta", "two"),
            make_post(3, "gamma", "betamax"),
        ];

        let filtered = filter_posts(&posts, "beta");

        // Every included post matches, every excluded post does not.
        assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
        for post in &posts {
            let included = filtered.iter().any(|p| p.id == post.id);
            let matches = post.title.contains("beta") || post.body.contains("beta");
            assert_eq!(included, matches);
        }
    }
}
