//! HTTP transport and the entity fetch adapter.

pub mod fetch;
pub mod transport;

pub use fetch::FetchAdapter;
pub use transport::{HttpTransport, RawResponse};
