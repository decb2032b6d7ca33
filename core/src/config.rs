//! Client configuration.

use crate::http::Headers;

/// Settings applied to every request sent through an `HttpClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Headers sent with every request. Per-call headers of the same name win.
    pub default_headers: Headers,
    /// Maximum number of response bytes buffered before the read fails.
    pub body_limit: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_headers: Headers::new(),
            body_limit: u64::MAX,
        }
    }
}

impl ClientConfig {
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn body_limit(mut self, limit: u64) -> Self {
        self.body_limit = limit;
        self
    }
}
