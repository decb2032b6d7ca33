//! HTTP request and response descriptors.
//!
//! # Design
//! These types describe one request/response cycle as plain owned data. The
//! dispatcher in `client` turns an `HttpRequest` into a wire request and hands
//! back an `HttpResponse` whose body is already fully buffered.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use ureq::http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::Error;

/// Custom request headers, one value per name.
///
/// Names are matched case-insensitively on the wire. When two keys differ only
/// in case, the one that sorts last wins.
pub type Headers = BTreeMap<String, String>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub(crate) fn to_http(self) -> ureq::http::Method {
        match self {
            HttpMethod::Get => ureq::http::Method::GET,
            HttpMethod::Post => ureq::http::Method::POST,
            HttpMethod::Put => ureq::http::Method::PUT,
            HttpMethod::Delete => ureq::http::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(Error::UnsupportedMethod(s.to_string())),
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// A request with no custom headers and no body.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn with_headers(mut self, headers: Option<&Headers>) -> Self {
        if let Some(headers) = headers {
            self.headers.extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A fully buffered HTTP response.
///
/// Any status is a successful round-trip here; interpreting 4xx/5xx is left
/// to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fold header layers into one map, later layers replacing earlier ones.
pub(crate) fn header_map<'a, I>(layers: I) -> Result<HeaderMap, Error>
where
    I: IntoIterator<Item = &'a Headers>,
{
    let mut map = HeaderMap::new();
    for headers in layers {
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Build(e.into()))?;
            let value = HeaderValue::from_str(value).map_err(|e| Error::Build(e.into()))?;
            map.insert(name, value);
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> Headers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("Put".parse::<HttpMethod>().unwrap(), HttpMethod::Put);
        assert_eq!("delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn method_rejects_unknown_verb() {
        let err = "PATCH".parse::<HttpMethod>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedMethod(ref m) if m == "PATCH"));
    }

    #[test]
    fn method_displays_as_verb() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Put.to_http(), ureq::http::Method::PUT);
    }

    #[test]
    fn request_builder_merges_headers_and_body() {
        let custom = headers(&[("X-Token", "abc")]);
        let req = HttpRequest::new(HttpMethod::Post, "http://localhost/")
            .with_headers(Some(&custom))
            .with_body("payload");
        assert_eq!(req.headers.get("X-Token").map(String::as_str), Some("abc"));
        assert_eq!(req.body.as_deref(), Some(&b"payload"[..]));
    }

    #[test]
    fn request_without_headers_is_empty() {
        let req = HttpRequest::new(HttpMethod::Get, "http://localhost/").with_headers(None);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn later_layer_overrides_earlier() {
        let defaults = headers(&[("x-env", "default"), ("accept", "text/plain")]);
        let call = headers(&[("X-Env", "call")]);
        let map = header_map([&defaults, &call]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("x-env").unwrap(), "call");
        assert_eq!(map.get("accept").unwrap(), "text/plain");
    }

    #[test]
    fn case_variants_keep_last_sorted_key() {
        // "X-A" sorts before "x-a" in a BTreeMap.
        let map = header_map([&headers(&[("x-a", "lower"), ("X-A", "upper")])]).unwrap();
        assert_eq!(map.get_all("x-a").iter().count(), 1);
        assert_eq!(map.get("x-a").unwrap(), "lower");
    }

    #[test]
    fn invalid_header_name_is_build_error() {
        let err = header_map([&headers(&[("bad header", "v")])]).unwrap_err();
        assert!(matches!(err, Error::Build(_)));
    }

    #[test]
    fn invalid_header_value_is_build_error() {
        let err = header_map([&headers(&[("x-ok", "line\nbreak")])]).unwrap_err();
        assert!(matches!(err, Error::Build(_)));
    }

    #[test]
    fn success_range() {
        let mut resp = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: Vec::new(),
        };
        assert!(resp.is_success());
        resp.status = 404;
        assert!(!resp.is_success());
    }
}
