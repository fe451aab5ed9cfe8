//! HTTP client for the notreddit REST API.
//!
//! Requests go through the browser's `fetch`. The bearer token is read from
//! localStorage on every call, so signing in or out takes effect immediately.
//! Each call is a single attempt: no retries, timeouts, or caching.

pub mod auth;
pub mod comment;
pub mod mention;
pub mod post;
pub mod subreddit;
pub mod user;
pub mod vote;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

use crate::config::{API_BASE_URL, DEFAULT_SORT, PAGE_SIZE};
use crate::error::{ApiError, ErrorBody};
use crate::storage::{LocalTokenStore, TokenStore};

pub use post::PostFeed;

/// Request payload variants.
enum Body<'a> {
    Empty,
    Json(String),
    Multipart(&'a FormData),
}

/// Thin fetch wrapper bound to one base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiClient {
    base_url: &'static str,
}

impl ApiClient {
    pub fn new(base_url: &'static str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/'),
        }
    }

    /// Client for the build-time configured API.
    pub fn from_config() -> Self {
        Self::new(API_BASE_URL)
    }

    /// Where the bearer token is kept.
    pub const fn tokens(&self) -> LocalTokenStore {
        LocalTokenStore
    }

    pub fn has_token(&self) -> bool {
        self.tokens().token().is_some()
    }

    /// Absolute URL for an API path such as `/post/all`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send("GET", path, Body::Empty).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send("POST", path, Body::Empty).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send("DELETE", path, Body::Empty).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send("POST", path, Body::Json(json)).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &FormData,
    ) -> Result<T, ApiError> {
        self.send("POST", path, Body::Multipart(form)).await
    }

    #[allow(clippy::future_not_send)]
    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Body<'_>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let token = self.tokens().token();

        let headers = Headers::new().map_err(browser_error)?;
        for (name, value) in request_headers(token.as_deref(), matches!(body, Body::Json(_))) {
            headers.set(name, &value).map_err(browser_error)?;
        }

        let init = RequestInit::new();
        init.set_method(method);
        init.set_mode(RequestMode::Cors);
        init.set_headers(&headers);
        match &body {
            Body::Empty => {}
            Body::Json(json) => init.set_body(&JsValue::from_str(json)),
            Body::Multipart(form) => init.set_body(form),
        }

        let request = Request::new_with_str_and_init(&url, &init).map_err(browser_error)?;
        let window =
            web_sys::window().ok_or_else(|| ApiError::Browser("window unavailable".to_string()))?;

        log::debug!("{method} {url}");
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| {
                let err = ApiError::Network(js_error(&e));
                log::warn!("{method} {url} failed: {err}");
                err
            })?;
        let response: Response = response.dyn_into().map_err(browser_error)?;

        // The server answers with JSON on success and failure alike.
        let json = match response.json() {
            Ok(promise) => JsFuture::from(promise).await.ok(),
            Err(_) => None,
        };

        if !response.ok() {
            let body = json.and_then(|value| serde_wasm_bindgen::from_value::<ErrorBody>(value).ok());
            let err = ApiError::rejected(response.status(), body);
            log::warn!("{method} {url} failed: {err}");
            return Err(err);
        }

        let value = json.ok_or_else(|| ApiError::Decode(format!("{method} {url}: body is not JSON")))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| {
            let err = ApiError::Decode(format!("{method} {url}: {e}"));
            log::error!("{err}");
            err
        })
    }
}

/// Headers sent with every request.
pub fn request_headers(token: Option<&str>, json_body: bool) -> Vec<(&'static str, String)> {
    let mut headers = Vec::with_capacity(2);
    if json_body {
        headers.push(("Content-Type", "application/json".to_string()));
    }
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    headers
}

/// Zero-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const fn first() -> Self {
        Self {
            page: 0,
            size: PAGE_SIZE,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page + 1,
            size: self.size,
        }
    }

    /// Whether more items exist beyond this page.
    pub const fn has_more(self, total: u64) -> bool {
        (self.page as u64 + 1) * (self.size as u64) < total
    }

    pub fn query_pairs(self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", DEFAULT_SORT.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Percent-encode one path segment or query value.
pub(crate) fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

/// Append an encoded query string to `path`.
pub(crate) fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn browser_error(value: JsValue) -> ApiError {
    ApiError::Browser(js_error(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.endpoint("/post/all"), "http://localhost:8000/api/post/all");
        assert_eq!(client.endpoint("user/me"), "http://localhost:8000/api/user/me");
    }

    #[test]
    fn bearer_header_only_with_token() {
        assert!(request_headers(None, false).is_empty());
        assert!(request_headers(Some(""), false).is_empty());
        assert_eq!(
            request_headers(Some("abc"), false),
            vec![("Authorization", "Bearer abc".to_string())]
        );
    }

    #[test]
    fn json_requests_declare_content_type() {
        let headers = request_headers(Some("abc"), true);
        assert_eq!(headers[0], ("Content-Type", "application/json".to_string()));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn page_request_paging() {
        let first = PageRequest::first();
        assert_eq!(first.page, 0);
        assert_eq!(first.size, PAGE_SIZE);
        assert!(first.has_more(u64::from(PAGE_SIZE) + 1));
        assert!(!first.has_more(u64::from(PAGE_SIZE)));
        assert_eq!(first.next().page, 1);
    }

    #[test]
    fn page_query_pairs() {
        let pairs = PageRequest { page: 2, size: 5 }.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("size", "5".to_string()),
                ("sort", DEFAULT_SORT.to_string()),
            ]
        );
    }
}
