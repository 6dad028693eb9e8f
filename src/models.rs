//! Frontend Models
//!
//! Data structures matching the posts endpoint.

use serde::{Deserialize, Serialize};

/// Post record as served by the endpoint
///
/// Only `id`, `title` and `body` are rendered; `user_id` comes along
/// because the endpoint always includes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_endpoint_shape() {
        let json = r#"{"userId": 1, "id": 7, "title": "sunt aut facere", "body": "quia et suscipit"}"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(post.user_id, 1);
        assert_eq!(post.title, "sunt aut facere");
        assert_eq!(post.body, "quia et suscipit");
    }

    #[test]
    fn test_deserialize_array() {
        let json = r#"[
            {"userId": 1, "id": 1, "title": "first", "body": "alpha"},
            {"userId": 1, "id": 2, "title": "second", "body": "beta"}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].title, "second");
    }
}
