//! # Bourse SDK
//!
//! A Rust client for the Bourse trading-game REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Codec** — the property-aware (de)serialization layer: every entity
//!    field is a wrapped value that is either present or explicitly empty,
//!    and a dispatch registry picks the right codec per field shape.
//! 2. **HTTP** — `HttpTransport` (authenticated GET/POST) and the
//!    `FetchAdapter` (single fetch → `Option`, multi fetch → `Vec`).
//! 3. **Domain** — vertical slices: entities, wire conversions, sub-clients.
//! 4. **High-Level Client** — `BourseClient` with nested sub-clients.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bourse_sdk::prelude::*;
//!
//! let credentials = bourse_sdk::auth::login(DEFAULT_API_URL, "trader1", "secret").await?;
//! let client = BourseClient::builder().credentials(credentials).build()?;
//!
//! let companies = client.companies().list().await;
//! if let Some(account) = client.accounts().own().await {
//!     println!("cash: {:?}", account.cash());
//! }
//! ```

// ── Layer 1: Codec ───────────────────────────────────────────────────────────

/// Property-aware codec layer: wrapped values, descriptors, dispatch registry.
pub mod codec;

/// Shared helpers (timestamps, serde utilities).
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Client configuration (immutable, injected).
pub mod config;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Authentication: credential exchange.
#[cfg(feature = "http")]
pub mod auth;

/// HTTP transport and fetch adapter.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): entities, wire conversions, sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BourseClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Codec layer
    pub use crate::codec::{
        Decoded, Describe, FromWire, RawKind, ToWire, TypeDescriptor, Wrapped,
    };

    // Domain types
    pub use crate::domain::account::BankAccount;
    pub use crate::domain::bond::Bond;
    pub use crate::domain::broker::{Broker, BrokerLicense};
    pub use crate::domain::company::Company;
    pub use crate::domain::order::{Order, OrderKind, OrderSide, SecurityKind};
    pub use crate::domain::portfolio::{Portfolio, Position};
    pub use crate::domain::price::PriceSpread;

    // Errors
    pub use crate::error::{CodecError, SdkError};

    // Network + config
    pub use crate::config::ApiConfig;
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    #[cfg(feature = "http")]
    pub use crate::auth::Credentials;

    // HTTP + client
    #[cfg(feature = "http")]
    pub use crate::client::{BourseClient, BourseClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::domain::order::PlaceOrderRequest;
    #[cfg(feature = "http")]
    pub use crate::http::{FetchAdapter, HttpTransport};
}
