//! Blocking HTTP helpers with custom headers and JSON bodies.
//!
//! # Overview
//! `get`, `post`, `put` and `delete` send one request and return the fully
//! buffered response body. The `*_json` variants encode a request value with
//! serde (POST/PUT) and decode the response into a caller-chosen type.
//!
//! # Design
//! - One dispatch path (`HttpClient::execute`); every helper layers on it.
//! - Free functions build a client per call. `HttpClient` can be kept and
//!   cloned when connection reuse is wanted.
//! - Non-2xx responses are returned as bodies, not errors.
//! - Errors name the failing stage and are never retried.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod oneshot;

pub use client::HttpClient;
pub use config::ClientConfig;
pub use error::Error;
pub use http::{Headers, HttpMethod, HttpRequest, HttpResponse};
pub use oneshot::{delete, delete_json, get, get_json, post, post_json, put, put_json, request};
