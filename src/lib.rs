//! # ORE ID Rust SDK
//!
//! A Rust client for the ORE ID identity and wallet service.
//!
//! ## Modules
//!
//! - [`api`]: REST client, redirect URL builders, request/response types
//! - [`network`]: Service URL constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oreid_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OreIdClient::builder()
//!         .api_key("t_k...")
//!         .service_key("s_k...")
//!         .build()?;
//!
//!     // Send a one-time login code, then build the URL that completes the login
//!     client.passwordless_send_code(Provider::Email, "someone@example.com").await?;
//!
//!     let token = client.get_app_token(&AppTokenRequest::default()).await?;
//!     let url = client.passwordless_authenticate_url(&PasswordlessAuthenticateParams::new(
//!         token.app_access_token.unwrap_or_default(),
//!         Provider::Email,
//!         "https://app.example/callback",
//!         "FFFFFF",
//!         "state-1",
//!         "someone@example.com",
//!         123456,
//!     ))?;
//!     println!("Open {}", url);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Feature flags
//!
//! - `http` (default): [`api::ReqwestTransport`], used when no transport is injected
//! - `rustls-tls` (default): TLS through rustls
//! - `test-utils`: [`api::MockTransport`] for downstream tests

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module.
pub mod api;

/// Network URL constants.
pub mod network;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use oreid_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiResult, HttpTransport, OreIdClient, OreIdClientBuilder,
        // Common types
        AddPermissionParams, AppTokenRequest, AppTokenResponse, AuthenticateParams,
        CanAutoSignRequest, CanAutoSignResponse, ChainsConfiguration, CreateChainAccountRequest,
        CustodialChangePasswordRequest, CustodialCreateUserRequest, CustodialMigrateAccountRequest,
        CustodialSignTransactionRequest, LogoutParams, PasswordlessAuthenticateParams,
        PasswordlessSendCodeResponse, PasswordlessVerifyCodeResponse, Provider,
        SignTransactionParams, TokenAirdropRequest, TokenAirdropResponse,
        TransactionComposeActionRequest, UserInfo,
    };

    #[cfg(feature = "http")]
    pub use crate::api::ReqwestTransport;

    // Network constants
    pub use crate::network::DEFAULT_API_URL;
}
