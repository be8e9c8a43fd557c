//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Timeout")]
    Timeout,
}

/// Codec-layer errors.
///
/// Wire `null` and absent keys are never errors in this layer — they decode
/// to the empty wrapped state. These variants cover shape mismatches and
/// registry misconfiguration only.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The wire token had a different shape than the field's descriptor.
    #[error("Expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: String,
    },

    /// A numeric token did not fit the target scalar type.
    #[error("Number out of range for {target}: {value}")]
    OutOfRange {
        target: &'static str,
        value: String,
    },

    /// No factory matched a shape that is a genuine wrapper type.
    ///
    /// `CodecRegistryBuilder::build` raises this at construction for every
    /// expected shape, so a full factory chain never sees it at request time.
    #[error("No codec registered for wrapper shape {0}")]
    Unresolvable(String),

    #[error("Entity decode failed: {0}")]
    Entity(#[from] serde_json::Error),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Login failed: {0}")]
    LoginFailed(String),
}
