//! Authentication: credential exchange for the client builder.
//!
//! Login is a single POST that trades a username/password pair for a bearer
//! token. The token goes into the immutable [`ApiConfig`] a client is built
//! from; there is no session state to refresh afterwards.

use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{AuthError, SdkError};
use crate::http::HttpTransport;

/// Login request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub partner_id: Option<String>,
}

/// A bearer token plus the partner id it was issued under.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: String,
    pub partner_id: Option<String>,
}

/// Exchange a username/password pair for credentials.
///
/// Runs over an unauthenticated transport against `base_url`; feed the
/// result to [`BourseClientBuilder::credentials`](crate::client::BourseClientBuilder::credentials).
pub async fn login(
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<Credentials, SdkError> {
    let transport = HttpTransport::new(ApiConfig::new(base_url))?;
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = transport.post("/api/login", &request).await?;
    if !response.is_success() {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        return Err(AuthError::LoginFailed(format!("status {}: {}", response.status, body)).into());
    }

    let parsed: LoginResponse = serde_json::from_slice(&response.body)?;
    Ok(Credentials {
        token: parsed.token,
        partner_id: parsed.partner_id,
    })
}
