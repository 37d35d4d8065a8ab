//! Request and response types for the ORE ID API.
//!
//! Response records mirror the service's camelCase JSON; request bodies use the
//! snake_case field names the service expects.

pub mod account;
pub mod app_token;
pub mod config;
pub mod custodial;
pub mod passwordless;
pub mod redirect;
pub mod token;
pub mod transaction;

use serde::{Deserialize, Deserializer};

// Re-export all types for convenience
pub use account::*;
pub use app_token::*;
pub use config::*;
pub use custodial::*;
pub use passwordless::*;
pub use redirect::*;
pub use token::*;
pub use transaction::*;

/// Reads an explicit `null` as `T::default()`. Pair with `#[serde(default)]`
/// so a missing key behaves the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
