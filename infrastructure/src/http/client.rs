//! HTTP client wrapper for backend requests.
//!
//! The backend discriminates fetch-style requests from full page loads by
//! the `X-Requested-With` header, so every request this client sends
//! carries it. Callers receive the wrapper by injection instead of hooking
//! a global request lifecycle.

use kb_application::BackendError;
use reqwest::header::{HeaderMap, HeaderValue};

/// Header the backend uses for request discrimination.
const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "htmx");

/// A reqwest client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given base URL (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert(REQUESTED_WITH.0, HeaderValue::from_static(REQUESTED_WITH.1));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(BackendError::InvalidUrl("empty base URL".to_string()));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.delete(self.url(path))
    }
}
