//! Network URL constants for the Bourse SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.bourse-game.de";
