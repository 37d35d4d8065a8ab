//! ORE ID REST API client implementation.
//!
//! The [`OreIdClient`] provides one method per ORE ID endpoint. Networked
//! methods go through the injected [`HttpTransport`]; redirect flows only build
//! a URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use oreid_sdk::api::{AppTokenRequest, OreIdClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OreIdClient::builder()
//!         .api_key("t_k...")
//!         .service_key("s_k...")
//!         .build()?;
//!
//!     let token = client.get_app_token(&AppTokenRequest::default()).await?;
//!     let user = client.get_user("ore1siwzstth").await?;
//!     println!("{:?} has {} permissions", user.account_name, user.permissions.len());
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{require, ApiError, ApiResult};
use crate::api::query::QueryBuilder;
use crate::api::redirect;
use crate::api::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::api::types::*;
use crate::network::DEFAULT_API_URL;

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the app's API key.
pub const API_KEY_HEADER: &str = "api-key";

/// Header carrying the enterprise service key.
pub const SERVICE_KEY_HEADER: &str = "service-key";

/// Environment variable overriding the service URL.
pub const ENV_API_URL: &str = "OREID_API_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "OREID_API_KEY";
/// Environment variable holding the service key.
pub const ENV_SERVICE_KEY: &str = "OREID_SERVICE_KEY";

/// Which credentials an endpoint sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    ApiKey,
    /// Service key sent only if configured
    ApiKeyOptionalServiceKey,
    ApiKeyAndServiceKey,
}

/// Builder for configuring [`OreIdClient`].
pub struct OreIdClientBuilder {
    base_url: String,
    api_key: Option<String>,
    service_key: Option<String>,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl OreIdClientBuilder {
    /// Create a builder pointing at [`DEFAULT_API_URL`].
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            service_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
            transport: None,
        }
    }

    /// Create a builder from `OREID_API_URL`, `OREID_API_KEY` and `OREID_SERVICE_KEY`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            builder = builder.base_url(url);
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            builder = builder.api_key(key);
        }
        if let Ok(key) = std::env::var(ENV_SERVICE_KEY) {
            builder = builder.service_key(key);
        }
        builder
    }

    /// Set the service base URL (trailing slash removed).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the API key sent as `api-key`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the service key sent as `service-key` (ORE ID Enterprise).
    pub fn service_key(mut self, key: impl Into<String>) -> Self {
        self.service_key = Some(key.into());
        self
    }

    /// Set the request timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout of the default transport in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a header sent by the default transport on every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Use a custom transport instead of the default reqwest one.
    ///
    /// `timeout` and `header` are ignored when a transport is injected.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<OreIdClient> {
        let transport = match self.transport {
            Some(t) => t,
            None => default_transport(self.timeout, &self.default_headers)?,
        };

        Ok(OreIdClient {
            base_url: self.base_url,
            api_key: self.api_key,
            service_key: self.service_key,
            transport,
        })
    }
}

impl Default for OreIdClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "http")]
fn default_transport(
    timeout: Duration,
    headers: &[(String, String)],
) -> ApiResult<Arc<dyn HttpTransport>> {
    let transport = crate::api::transport::ReqwestTransport::with_options(timeout, headers)?;
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport(
    _timeout: Duration,
    _headers: &[(String, String)],
) -> ApiResult<Arc<dyn HttpTransport>> {
    Err(ApiError::InvalidParameter(
        "no transport configured: enable the `http` feature or call `transport()`".to_string(),
    ))
}

/// ORE ID API client.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct OreIdClient {
    base_url: String,
    api_key: Option<String>,
    service_key: Option<String>,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for OreIdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OreIdClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("service_key", &self.service_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl OreIdClient {
    /// Create a client for the default service URL with the given API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the default HTTP transport cannot be initialized.
    pub fn new(api_key: impl Into<String>) -> ApiResult<Self> {
        OreIdClientBuilder::new().api_key(api_key).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> OreIdClientBuilder {
        OreIdClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a non-empty service key is configured.
    pub fn has_service_key(&self) -> bool {
        self.service_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    // =========================================================================
    // App token
    // =========================================================================

    /// Get an app access token, needed by the authentication and signing
    /// redirect flows.
    ///
    /// `POST /api/app-token`. Sends `service-key` only when one is configured.
    pub async fn get_app_token(&self, request: &AppTokenRequest) -> ApiResult<AppTokenResponse> {
        let url = QueryBuilder::new(&self.base_url, "/api/app-token").build();
        self.post(url, request, Auth::ApiKeyOptionalServiceKey).await
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Get service configuration of the given type.
    ///
    /// `GET /api/services/config?type={config_type}`
    pub async fn get_chains_config(&self, config_type: &str) -> ApiResult<ChainsConfiguration> {
        let config_type = require(config_type, "type")?;
        let url = QueryBuilder::new(&self.base_url, "/api/services/config")
            .param("type", config_type)
            .build();
        self.get(url, Auth::ApiKey).await
    }

    /// Get names, networks and hosts of every supported chain.
    pub async fn get_chains(&self) -> ApiResult<ChainsConfiguration> {
        self.get_chains_config(CONFIG_TYPE_CHAINS).await
    }

    // =========================================================================
    // Account endpoints
    // =========================================================================

    /// Get a user's information record.
    ///
    /// `GET /api/account/user?account={account}`
    pub async fn get_user(&self, account: &str) -> ApiResult<UserInfo> {
        let account = require(account, "account")?;
        let url = QueryBuilder::new(&self.base_url, "/api/account/user")
            .param("account", account)
            .build();
        self.get(url, Auth::ApiKey).await
    }

    /// Add a public key to an existing ORE ID account.
    ///
    /// `GET /api/account/add-permission`. Succeeds on any 2xx.
    pub async fn add_permission(&self, params: &AddPermissionParams) -> ApiResult<()> {
        let account = require(&params.account, "account")?;
        let permission = require(&params.permission, "permission")?;
        let parent_permission = require(&params.parent_permission, "parent_permission")?;
        let wallet_type = require(&params.wallet_type, "wallet_type")?;
        let chain_account = require(&params.chain_account, "chain_account")?;
        let chain_network = require(&params.chain_network, "chain_network")?;
        let public_key = require(&params.public_key, "public_key")?;

        let url = QueryBuilder::new(&self.base_url, "/api/account/add-permission")
            .param("account", account)
            .param("permission", permission)
            .param("parent-permission", parent_permission)
            .param("wallet-type", wallet_type)
            .param("chain-account", chain_account)
            .param("chain-network", chain_network)
            .param("public-key", public_key)
            .build();

        let request = self.authorize(HttpRequest::get(url), Auth::ApiKey)?;
        self.execute(request).await?;
        Ok(())
    }

    // =========================================================================
    // Passwordless login
    // =========================================================================

    /// Send a one-time login code by email or SMS.
    ///
    /// `GET /api/account/login-passwordless-send-code?provider=&email=`
    pub async fn passwordless_send_code(
        &self,
        provider: Provider,
        email_or_phone: &str,
    ) -> ApiResult<PasswordlessSendCodeResponse> {
        let email_or_phone = require(email_or_phone, "email_or_phone")?;
        let url = QueryBuilder::new(&self.base_url, "/api/account/login-passwordless-send-code")
            .param("provider", &provider)
            .param("email", email_or_phone)
            .build();
        self.get(url, Auth::ApiKey).await
    }

    /// Verify a one-time login code entered by the user.
    ///
    /// `GET /api/account/login-passwordless-verify-code?email=&provider=&code=`
    pub async fn passwordless_verify_code(
        &self,
        email_or_phone: &str,
        provider: Provider,
        code: u32,
    ) -> ApiResult<PasswordlessVerifyCodeResponse> {
        let email_or_phone = require(email_or_phone, "email_or_phone")?;
        let url = QueryBuilder::new(&self.base_url, "/api/account/login-passwordless-verify-code")
            .param("email", email_or_phone)
            .param("provider", &provider)
            .param("code", &code)
            .build();
        self.get(url, Auth::ApiKey).await
    }

    // =========================================================================
    // Transaction endpoints
    // =========================================================================

    /// Sign a transaction with a custodial account's key.
    ///
    /// `POST /api/transaction/sign`. The success body is returned as opaque JSON
    /// (see [`CustodialSignTransactionResponse`] for the documented shape).
    pub async fn custodial_sign_transaction(
        &self,
        request: &CustodialSignTransactionRequest,
    ) -> ApiResult<serde_json::Value> {
        let url = QueryBuilder::new(&self.base_url, "/api/transaction/sign").build();
        self.post_opaque(url, request, Auth::ApiKeyAndServiceKey).await
    }

    /// Check whether a transaction can be signed without user interaction.
    ///
    /// `POST /api/transaction/can-auto-sign`
    pub async fn can_auto_sign(&self, request: &CanAutoSignRequest) -> ApiResult<CanAutoSignResponse> {
        let url = QueryBuilder::new(&self.base_url, "/api/transaction/can-auto-sign").build();
        self.post(url, request, Auth::ApiKeyAndServiceKey).await
    }

    /// Compose a chain action from a template.
    ///
    /// `POST /api/transaction/compose-action`. Returns opaque JSON.
    pub async fn compose_action(
        &self,
        request: &TransactionComposeActionRequest,
    ) -> ApiResult<serde_json::Value> {
        let url = QueryBuilder::new(&self.base_url, "/api/transaction/compose-action").build();
        self.post_opaque(url, request, Auth::ApiKey).await
    }

    // =========================================================================
    // Custodial account endpoints
    // =========================================================================

    /// `POST /api/custodial/change-password`. Returns opaque JSON.
    pub async fn custodial_change_password(
        &self,
        request: &CustodialChangePasswordRequest,
    ) -> ApiResult<serde_json::Value> {
        let url = QueryBuilder::new(&self.base_url, "/api/custodial/change-password").build();
        self.post_opaque(url, request, Auth::ApiKeyAndServiceKey).await
    }

    /// `POST /api/custodial/migrate-account`. Returns opaque JSON.
    pub async fn custodial_migrate_account(
        &self,
        request: &CustodialMigrateAccountRequest,
    ) -> ApiResult<serde_json::Value> {
        let url = QueryBuilder::new(&self.base_url, "/api/custodial/migrate-account").build();
        self.post_opaque(url, request, Auth::ApiKeyAndServiceKey).await
    }

    /// Create a custodial ORE ID account.
    ///
    /// `POST /api/custodial/new-user`. Returns opaque JSON.
    pub async fn custodial_create_user(
        &self,
        request: &CustodialCreateUserRequest,
    ) -> ApiResult<serde_json::Value> {
        let url = QueryBuilder::new(&self.base_url, "/api/custodial/new-user").build();
        self.post_opaque(url, request, Auth::ApiKeyAndServiceKey).await
    }

    /// Create a chain account for an existing custodial user.
    ///
    /// `POST /api/custodial/new-chain-account`. Returns opaque JSON.
    pub async fn custodial_create_chain_account(
        &self,
        request: &CreateChainAccountRequest,
    ) -> ApiResult<serde_json::Value> {
        let url = QueryBuilder::new(&self.base_url, "/api/custodial/new-chain-account").build();
        self.post_opaque(url, request, Auth::ApiKeyAndServiceKey).await
    }

    // =========================================================================
    // Token endpoints
    // =========================================================================

    /// Airdrop tokens to a chain account.
    ///
    /// `POST /api/token/airdrop`
    pub async fn token_airdrop(&self, request: &TokenAirdropRequest) -> ApiResult<TokenAirdropResponse> {
        let url = QueryBuilder::new(&self.base_url, "/api/token/airdrop").build();
        self.post(url, request, Auth::ApiKeyAndServiceKey).await
    }

    // =========================================================================
    // Redirect flows (no network call)
    // =========================================================================

    /// URL that asks the user to sign a transaction in the browser.
    pub fn sign_transaction_url(&self, params: &SignTransactionParams) -> ApiResult<String> {
        redirect::sign_transaction_url(&self.base_url, params)
    }

    /// URL that logs a user in through a provider.
    pub fn authenticate_url(&self, params: &AuthenticateParams) -> ApiResult<String> {
        redirect::authenticate_url(&self.base_url, params)
    }

    /// URL that finishes a passwordless login with the received code.
    pub fn passwordless_authenticate_url(
        &self,
        params: &PasswordlessAuthenticateParams,
    ) -> ApiResult<String> {
        redirect::passwordless_authenticate_url(&self.base_url, params)
    }

    /// URL that clears the user's login tokens.
    pub fn logout_url(&self, params: &LogoutParams) -> ApiResult<String> {
        redirect::logout_url(&self.base_url, params)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn api_key(&self) -> ApiResult<&str> {
        require(self.api_key.as_deref().unwrap_or_default(), "api_key")
    }

    fn service_key(&self) -> ApiResult<&str> {
        require(self.service_key.as_deref().unwrap_or_default(), "service_key")
    }

    /// Attach credential headers, failing if a required one is missing.
    fn authorize(&self, request: HttpRequest, auth: Auth) -> ApiResult<HttpRequest> {
        let mut request = request.header(API_KEY_HEADER, self.api_key()?);
        match auth {
            Auth::ApiKey => {}
            Auth::ApiKeyOptionalServiceKey => {
                if self.has_service_key() {
                    request = request.header(SERVICE_KEY_HEADER, self.service_key()?);
                }
            }
            Auth::ApiKeyAndServiceKey => {
                request = request.header(SERVICE_KEY_HEADER, self.service_key()?);
            }
        }
        Ok(request)
    }

    /// Execute a GET request and decode the JSON response.
    async fn get<T: DeserializeOwned>(&self, url: String, auth: Auth) -> ApiResult<T> {
        let request = self.authorize(HttpRequest::get(url), auth)?;
        let response = self.execute(request).await?;
        Self::decode(&response)
    }

    /// Execute a POST request with JSON body and decode the JSON response.
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: String,
        body: &B,
        auth: Auth,
    ) -> ApiResult<T> {
        let body = serde_json::to_string(body)?;
        let request = self.authorize(HttpRequest::post_json(url, body), auth)?;
        let response = self.execute(request).await?;
        Self::decode(&response)
    }

    /// Execute a POST request whose success body has no documented shape.
    async fn post_opaque<B: Serialize>(
        &self,
        url: String,
        body: &B,
        auth: Auth,
    ) -> ApiResult<serde_json::Value> {
        let body = serde_json::to_string(body)?;
        let request = self.authorize(HttpRequest::post_json(url, body), auth)?;
        let response = self.execute(request).await?;
        Ok(Self::decode_opaque(&response))
    }

    /// Send through the transport; any non-2xx becomes [`ApiError::Remote`].
    async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let method = request.method;
        let path = Self::log_path(&request.url).to_string();
        tracing::debug!(%method, path = %path, "Sending ORE ID request");

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            tracing::warn!(
                %method,
                path = %path,
                status = response.status,
                "ORE ID request failed"
            );
            return Err(ApiError::Remote {
                status: response.status,
                body: response.body,
            });
        }

        tracing::debug!(%method, path = %path, status = response.status, "ORE ID request succeeded");
        Ok(response)
    }

    fn decode<T: DeserializeOwned>(response: &HttpResponse) -> ApiResult<T> {
        serde_json::from_str(&response.body).map_err(|e| {
            ApiError::Deserialize(format!("Failed to deserialize response: {}", e))
        })
    }

    /// Empty body → `null`; non-JSON body → JSON string holding the raw text.
    fn decode_opaque(response: &HttpResponse) -> serde_json::Value {
        let body = response.body.trim();
        if body.is_empty() {
            return serde_json::Value::Null;
        }
        serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(response.body.clone()))
    }

    /// Path without the query string (which may hold emails or tokens).
    fn log_path(url: &str) -> &str {
        url.split('?').next().unwrap_or(url)
    }
}
