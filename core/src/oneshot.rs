//! One-shot request functions.
//!
//! Each call builds its own `HttpClient`, so nothing is shared or reused
//! between calls. Keep an `HttpClient` instead when connection reuse matters.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::HttpClient;
use crate::error::Error;
use crate::http::{Headers, HttpMethod};

/// Send a request for a method given by name ("GET", "post", ...).
pub fn request(
    method: &str,
    url: &str,
    headers: Option<&Headers>,
    body: Option<Vec<u8>>,
) -> Result<Vec<u8>, Error> {
    let method: HttpMethod = method.parse()?;
    HttpClient::new().send(method, url, headers, body)
}

/// Send a GET request with custom headers.
pub fn get(url: &str, headers: Option<&Headers>) -> Result<Vec<u8>, Error> {
    HttpClient::new().get(url, headers)
}

/// Send a POST request with custom headers and body.
pub fn post(
    url: &str,
    headers: Option<&Headers>,
    body: impl Into<Vec<u8>>,
) -> Result<Vec<u8>, Error> {
    HttpClient::new().post(url, headers, body)
}

/// Send a PUT request with custom headers and body.
pub fn put(
    url: &str,
    headers: Option<&Headers>,
    body: impl Into<Vec<u8>>,
) -> Result<Vec<u8>, Error> {
    HttpClient::new().put(url, headers, body)
}

/// Send a DELETE request with custom headers.
pub fn delete(url: &str, headers: Option<&Headers>) -> Result<Vec<u8>, Error> {
    HttpClient::new().delete(url, headers)
}

/// Send a GET request and decode the JSON response.
pub fn get_json<T: DeserializeOwned>(url: &str, headers: Option<&Headers>) -> Result<T, Error> {
    HttpClient::new().get_json(url, headers)
}

/// Send `body` as JSON in a POST request and decode the JSON response.
pub fn post_json<B, T>(url: &str, headers: Option<&Headers>, body: &B) -> Result<T, Error>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    HttpClient::new().post_json(url, headers, body)
}

/// Send `body` as JSON in a PUT request and decode the JSON response.
pub fn put_json<B, T>(url: &str, headers: Option<&Headers>, body: &B) -> Result<T, Error>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    HttpClient::new().put_json(url, headers, body)
}

/// Send a DELETE request and decode the JSON response.
pub fn delete_json<T: DeserializeOwned>(url: &str, headers: Option<&Headers>) -> Result<T, Error> {
    HttpClient::new().delete_json(url, headers)
}
