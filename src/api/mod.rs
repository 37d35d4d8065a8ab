//! REST API client module for ORE ID.
//!
//! This module provides a typed client for the ORE ID service: app tokens,
//! chain configuration, account lookups, passwordless login, custodial
//! accounts, transaction signing and token airdrops.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use oreid_sdk::api::OreIdClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OreIdClient::new("t_k...")?;
//!
//!     let chains = client.get_chains().await?;
//!     println!("{} chains configured", chains.values.chains.len());
//!
//!     let user = client.get_user("ore1siwzstth").await?;
//!     println!("Account: {:?}", user.account_name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use oreid_sdk::api::OreIdClient;
//! use std::time::Duration;
//!
//! let client = OreIdClient::builder()
//!     .base_url("https://oreid.mycompany.example")
//!     .api_key("t_k...")
//!     .service_key("s_k...")
//!     .timeout(Duration::from_secs(60))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>`. A non-2xx status becomes
//! [`ApiError::Remote`], whose message is the service's response body:
//!
//! ```rust,ignore
//! use oreid_sdk::api::ApiError;
//!
//! match client.get_user("nosuchuser").await {
//!     Ok(user) => println!("Found {:?}", user.account_name),
//!     Err(ApiError::Remote { status, body }) => println!("{}: {}", status, body),
//!     Err(ApiError::MissingArgument(name)) => println!("forgot {}", name),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! # Redirect Flows
//!
//! Login, logout and user-approved signing happen in the user's browser. The
//! `*_url` methods only build the URL to open:
//!
//! ```rust,ignore
//! use oreid_sdk::api::{AuthenticateParams, Provider};
//!
//! let token = client.get_app_token(&Default::default()).await?;
//! let url = client.authenticate_url(
//!     &AuthenticateParams::new(token.app_access_token.unwrap_or_default(), Provider::Google, "https://app/cb", "FFFFFF"),
//! )?;
//! ```

pub mod client;
pub mod error;
pub mod query;
pub mod redirect;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{OreIdClient, OreIdClientBuilder, API_KEY_HEADER, SERVICE_KEY_HEADER};
pub use error::{ApiError, ApiResult};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;
pub use types::*;
