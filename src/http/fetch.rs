//! The HTTP-to-entity fetch adapter.
//!
//! Every entity endpoint goes through one of three shapes:
//!
//! - [`fetch_one`](FetchAdapter::fetch_one) — `Option<E>`: transport
//!   failure, non-2xx status, or decode failure all come back as `None`.
//!   Callers treat `None` as a normal outcome.
//! - [`fetch_many`](FetchAdapter::fetch_many) — `Vec<E>`: the same failure
//!   classes come back as an empty vec, never `None`. Call sites iterate
//!   without null-checking; that asymmetry is the contract, typed.
//! - [`post_one`](FetchAdapter::post_one) — POST variant of `fetch_one`.
//!
//! Failures are logged and absorbed here; nothing propagates. No retries,
//! no caching, no backoff.

use serde::Serialize;
use serde_json::Value;

use crate::codec::{CodecRegistry, FromWire};
use crate::error::HttpError;
use crate::http::transport::{HttpTransport, RawResponse};

/// Stateless bridge from raw HTTP responses to decoded entities.
#[derive(Debug, Clone)]
pub struct FetchAdapter {
    transport: HttpTransport,
    codecs: &'static CodecRegistry,
}

impl FetchAdapter {
    pub fn new(transport: HttpTransport, codecs: &'static CodecRegistry) -> Self {
        Self { transport, codecs }
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Fetch and decode a single entity. Any failure is `None`.
    pub async fn fetch_one<E: FromWire>(&self, path: &str) -> Option<E> {
        let response = self.transport.get(path).await;
        self.decode_one(path, response)
    }

    /// Fetch and decode an ordered list of entities. Any failure is an
    /// empty list.
    pub async fn fetch_many<E: FromWire>(&self, path: &str) -> Vec<E> {
        let response = self.transport.get(path).await;
        self.decode_many(path, response)
    }

    /// POST a body and decode the single entity in the response. Any
    /// failure is `None`.
    pub async fn post_one<E: FromWire, B: Serialize>(&self, path: &str, body: &B) -> Option<E> {
        let response = self.transport.post(path, body).await;
        self.decode_one(path, response)
    }

    fn decode_one<E: FromWire>(
        &self,
        path: &str,
        response: Result<RawResponse, HttpError>,
    ) -> Option<E> {
        let token = self.body_token(path, response)?;
        match E::from_wire(&token, self.codecs) {
            Ok(entity) => Some(entity),
            Err(error) => {
                tracing::warn!(path, %error, "Entity decode failed");
                None
            }
        }
    }

    fn decode_many<E: FromWire>(
        &self,
        path: &str,
        response: Result<RawResponse, HttpError>,
    ) -> Vec<E> {
        let Some(token) = self.body_token(path, response) else {
            return Vec::new();
        };
        let Some(elements) = token.as_array() else {
            tracing::warn!(path, found = %token_kind(&token), "Expected a wire array");
            return Vec::new();
        };

        let mut entities = Vec::with_capacity(elements.len());
        for element in elements {
            match E::from_wire(element, self.codecs) {
                Ok(entity) => entities.push(entity),
                Err(error) => {
                    tracing::warn!(path, %error, "Element decode failed");
                    return Vec::new();
                }
            }
        }
        entities
    }

    /// Parse a successful response body, absorbing every failure class.
    fn body_token(&self, path: &str, response: Result<RawResponse, HttpError>) -> Option<Value> {
        let response = match response {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(path, %error, "Transport failure");
                return None;
            }
        };

        if !response.is_success() {
            tracing::warn!(path, status = response.status, "Non-success status");
            return None;
        }

        match serde_json::from_slice(&response.body) {
            Ok(token) => Some(token),
            Err(error) => {
                tracing::warn!(path, %error, "Response body is not valid JSON");
                None
            }
        }
    }
}

fn token_kind(token: &Value) -> &'static str {
    match token {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
