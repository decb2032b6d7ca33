//! Blocking HTTP client and JSON helpers.
//!
//! # Design
//! `HttpClient` wraps a `ureq::Agent` configured to return 4xx/5xx responses
//! as data rather than errors, so every completed round-trip yields its body.
//! `execute` is the single dispatch path; the per-verb and JSON methods are
//! thin layers over it. A client may be kept around and cloned to share its
//! connection pool, while the crate-level free functions build a fresh one
//! per call.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use ureq::http::header::HeaderMap;
use ureq::http::request::Builder;
use ureq::{Agent, AsSendBody};

use crate::config::ClientConfig;
use crate::error::Error;
use crate::http::{header_map, Headers, HttpMethod, HttpRequest, HttpResponse};

/// Synchronous HTTP client.
#[derive(Clone)]
pub struct HttpClient {
    agent: Agent,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client with the default config.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom config.
    pub fn with_config(config: ClientConfig) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and buffer the whole response.
    ///
    /// Config default headers are applied first, then the request's own
    /// headers, one value per name. The body is sent untouched; no
    /// content type is inferred.
    pub fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        tracing::debug!("Making {} request to: {}", method, url);

        let headers = header_map([&self.config.default_headers, &headers])?;
        let builder = ureq::http::Request::builder()
            .method(method.to_http())
            .uri(url.as_str());

        let mut response = match body {
            Some(body) => self.run(builder, headers, body)?,
            None => self.run(builder, headers, ())?,
        };

        let status = response.status().as_u16();
        let response_headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.config.body_limit)
            .read_to_vec()
            .map_err(Error::Read)?;

        tracing::debug!("{} response: {} {} ({} bytes)", method, status, url, body.len());

        Ok(HttpResponse {
            status,
            headers: response_headers,
            body,
        })
    }

    fn run<B: AsSendBody>(
        &self,
        builder: Builder,
        headers: HeaderMap,
        body: B,
    ) -> Result<ureq::http::Response<ureq::Body>, Error> {
        let mut request = builder.body(body).map_err(Error::Build)?;
        *request.headers_mut() = headers;
        self.agent.run(request).map_err(Error::Transport)
    }

    /// Send a request and return only the response body.
    pub fn send(
        &self,
        method: HttpMethod,
        url: &str,
        headers: Option<&Headers>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, Error> {
        let mut request = HttpRequest::new(method, url).with_headers(headers);
        request.body = body;
        self.execute(request).map(|response| response.body)
    }

    pub fn get(&self, url: &str, headers: Option<&Headers>) -> Result<Vec<u8>, Error> {
        self.send(HttpMethod::Get, url, headers, None)
    }

    pub fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        body: impl Into<Vec<u8>>,
    ) -> Result<Vec<u8>, Error> {
        self.send(HttpMethod::Post, url, headers, Some(body.into()))
    }

    pub fn put(
        &self,
        url: &str,
        headers: Option<&Headers>,
        body: impl Into<Vec<u8>>,
    ) -> Result<Vec<u8>, Error> {
        self.send(HttpMethod::Put, url, headers, Some(body.into()))
    }

    pub fn delete(&self, url: &str, headers: Option<&Headers>) -> Result<Vec<u8>, Error> {
        self.send(HttpMethod::Delete, url, headers, None)
    }

    /// GET and decode the response body as JSON.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: Option<&Headers>,
    ) -> Result<T, Error> {
        decode(&self.get(url, headers)?)
    }

    /// Encode `body` as JSON, POST it, and decode the response.
    ///
    /// An encode failure returns before anything is sent.
    pub fn post_json<B, T>(
        &self,
        url: &str,
        headers: Option<&Headers>,
        body: &B,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        decode(&self.post(url, headers, body)?)
    }

    /// Encode `body` as JSON, PUT it, and decode the response.
    pub fn put_json<B, T>(
        &self,
        url: &str,
        headers: Option<&Headers>,
        body: &B,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        decode(&self.put(url, headers, body)?)
    }

    pub fn delete_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: Option<&Headers>,
    ) -> Result<T, Error> {
        decode(&self.delete(url, headers)?)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(body).map_err(Error::Encode)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(bytes).map_err(Error::Decode)
}
