//! Parameters for the browser redirect flows (`/auth`, `/sign`, `/logout`).

use crate::api::query::ToQueryValue;
use crate::api::types::account::Provider;

/// Query parameters for the `/sign` redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignTransactionParams {
    /// ORE ID account name
    pub account: String,
    /// Let the user pick another chain account (e.g. from an external wallet)
    pub allow_chain_account_selection: bool,
    pub app_access_token: String,
    /// Submit the transaction after signing
    pub broadcast: bool,
    /// Must match a callback URL registered in the app settings
    pub callback_url: String,
    pub chain_account: String,
    /// Network nickname from the chain configuration (e.g. `eos_kylin`)
    pub chain_network: String,
    /// Include the signed transaction in the callback
    pub return_signed_transaction: bool,
    /// Echoed back to the callback
    pub state: String,
    /// Base64-encoded transaction JSON
    pub transaction: String,
}

impl SignTransactionParams {
    /// Create params with all flags off.
    pub fn new(
        account: impl Into<String>,
        app_access_token: impl Into<String>,
        callback_url: impl Into<String>,
        chain_account: impl Into<String>,
        chain_network: impl Into<String>,
        state: impl Into<String>,
        transaction: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            allow_chain_account_selection: false,
            app_access_token: app_access_token.into(),
            broadcast: false,
            callback_url: callback_url.into(),
            chain_account: chain_account.into(),
            chain_network: chain_network.into(),
            return_signed_transaction: false,
            state: state.into(),
            transaction: transaction.into(),
        }
    }

    pub fn with_chain_account_selection(mut self, allow: bool) -> Self {
        self.allow_chain_account_selection = allow;
        self
    }

    pub fn with_broadcast(mut self, broadcast: bool) -> Self {
        self.broadcast = broadcast;
        self
    }

    pub fn with_return_signed_transaction(mut self, value: bool) -> Self {
        self.return_signed_transaction = value;
        self
    }
}

/// Query parameters for the `/auth` redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticateParams {
    pub app_access_token: String,
    pub provider: Provider,
    pub callback_url: String,
    /// Hex color for the login pages (e.g. `0022FF`)
    pub background_color: String,
    /// Optional URL-safe value echoed back to the callback
    pub state: Option<String>,
}

impl AuthenticateParams {
    pub fn new(
        app_access_token: impl Into<String>,
        provider: Provider,
        callback_url: impl Into<String>,
        background_color: impl Into<String>,
    ) -> Self {
        Self {
            app_access_token: app_access_token.into(),
            provider,
            callback_url: callback_url.into(),
            background_color: background_color.into(),
            state: None,
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Query parameters for the `/auth` redirect that completes a passwordless login.
///
/// On success the callback receives `account`, `state` and `process_id`. With a
/// wrong code it receives `error_code=cant_verify_login_code` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordlessAuthenticateParams {
    pub app_access_token: String,
    /// [`Provider::Email`] or [`Provider::Phone`]
    pub provider: Provider,
    pub callback_url: String,
    pub background_color: String,
    pub state: String,
    /// Email address or phone number the code was sent to
    pub email_or_phone: String,
    pub code: u32,
}

impl PasswordlessAuthenticateParams {
    pub fn new(
        app_access_token: impl Into<String>,
        provider: Provider,
        callback_url: impl Into<String>,
        background_color: impl Into<String>,
        state: impl Into<String>,
        email_or_phone: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            app_access_token: app_access_token.into(),
            provider,
            callback_url: callback_url.into(),
            background_color: background_color.into(),
            state: state.into(),
            email_or_phone: email_or_phone.into(),
            code,
        }
    }
}

/// `providers` value that clears every login provider.
pub const LOGOUT_ALL_PROVIDERS: &str = "all";

/// Query parameters for the `/logout` redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutParams {
    pub app_id: String,
    /// `all` or a comma-separated provider list
    pub providers: String,
    pub callback_url: String,
    pub state: Option<String>,
}

impl LogoutParams {
    /// Log out of every provider.
    pub fn new(app_id: impl Into<String>, callback_url: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            providers: LOGOUT_ALL_PROVIDERS.to_string(),
            callback_url: callback_url.into(),
            state: None,
        }
    }

    /// Log out of the given providers only.
    pub fn with_providers(mut self, providers: &[Provider]) -> Self {
        self.providers = providers.to_query_value();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_defaults_to_all() {
        let params = LogoutParams::new("app_123", "https://app/cb");
        assert_eq!(params.providers, "all");
        assert!(params.state.is_none());
    }

    #[test]
    fn test_logout_provider_list() {
        let params = LogoutParams::new("app_123", "https://app/cb")
            .with_providers(&[Provider::Google, Provider::Facebook])
            .with_state("s1");
        assert_eq!(params.providers, "google,facebook");
        assert_eq!(params.state.as_deref(), Some("s1"));
    }

    #[test]
    fn test_sign_params_flags() {
        let params = SignTransactionParams::new("acct", "tok", "https://cb", "chainacct", "eos_kylin", "st", "dHg=")
            .with_broadcast(true)
            .with_chain_account_selection(true);
        assert!(params.broadcast);
        assert!(params.allow_chain_account_selection);
        assert!(!params.return_signed_transaction);
    }
}
