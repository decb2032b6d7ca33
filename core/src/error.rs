//! Error types for the HTTP helpers.
//!
//! # Design
//! Each variant names the stage that failed: building the request, sending
//! it, reading the response, or the JSON encode/decode around them. Nothing
//! is retried, so the first failing stage is the only error a caller sees.

/// Errors returned by the request helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The method string is not one of GET, POST, PUT or DELETE.
    #[error("unsupported http method: {0}")]
    UnsupportedMethod(String),

    /// The URL or a header could not be turned into a request.
    #[error("failed to create http request: {0}")]
    Build(#[source] ureq::http::Error),

    /// Connecting to or sending to the target failed.
    #[error("failed to send http request: {0}")]
    Transport(#[source] ureq::Error),

    /// The response body could not be read in full.
    #[error("failed to read http response: {0}")]
    Read(#[source] ureq::Error),

    /// The request value could not be serialized to JSON.
    #[error("failed to marshal request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body is not JSON of the expected shape.
    #[error("failed to unmarshal response body: {0}")]
    Decode(#[source] serde_json::Error),
}
