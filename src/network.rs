//! Network URL constants for the ORE ID SDK.

/// Default ORE ID service base URL.
pub const DEFAULT_API_URL: &str = "https://service.oreid.io";
