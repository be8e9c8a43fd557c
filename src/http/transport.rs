//! Low-level HTTP transport — `HttpTransport`.
//!
//! A thin reqwest wrapper: issues GET/POST against the configured base URL,
//! attaches the auth headers, and hands back the raw status and body. It
//! interprets nothing — status handling is the fetch adapter's job.

use reqwest::Client;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::HttpError;

/// A raw response: status code plus undecoded body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Authenticated HTTP transport for the Bourse REST API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: ApiConfig,
}

impl HttpTransport {
    /// Build a transport from an immutable config.
    pub fn new(config: ApiConfig) -> Result<Self, HttpError> {
        config.validate()?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Issue a GET. Non-2xx responses are returned, not raised; `Err` means
    /// the request itself failed (connect, timeout, protocol).
    pub async fn get(&self, path: &str) -> Result<RawResponse, HttpError> {
        let request = self.decorate(self.client.get(self.url(path)));
        Self::exchange(request).await
    }

    /// Issue a POST with a JSON body. Same status contract as [`get`].
    ///
    /// [`get`]: Self::get
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<RawResponse, HttpError> {
        let request = self.decorate(self.client.post(self.url(path)).json(body));
        Self::exchange(request).await
    }

    fn decorate(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = self.config.auth_token() {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(partner_id) = self.config.partner_id() {
            request = request.header("X-Partner-Id", partner_id);
        }
        request
    }

    async fn exchange(request: reqwest::RequestBuilder) -> Result<RawResponse, HttpError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::from(e)
            }
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}
