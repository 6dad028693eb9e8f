//! Posts API
//!
//! The single outbound request of the app, issued once at startup via
//! the browser fetch API.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::Post;

const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// The one error kind the app knows: the startup fetch failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Non-success status from the endpoint
    #[error("HTTP Error: {0}")]
    Http(u16),
    /// Transport or decode failure, carrying the underlying message
    #[error("{0}")]
    Network(String),
}

/// Fetch the full post collection from the endpoint.
pub async fn fetch_posts() -> Result<Vec<Post>, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(POSTS_URL, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Network("unexpected fetch result".into()))?;

    if !resp.ok() {
        return Err(FetchError::Http(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Network(e.to_string()))
}

/// Pull a readable message out of a thrown JS value.
fn js_error(value: JsValue) -> FetchError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| format!("{:?}", value));
    FetchError::Network(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_carries_status() {
        assert_eq!(FetchError::Http(500).to_string(), "HTTP Error: 500");
        assert_eq!(FetchError::Http(404).to_string(), "HTTP Error: 404");
    }

    #[test]
    fn test_network_error_message_passes_through() {
        let err = FetchError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
