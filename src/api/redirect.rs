//! Redirect URL builders.
//!
//! These flows run in the user's browser, so the SDK never calls the network
//! for them. Each function validates its parameters and returns the URL; the
//! caller opens it however fits the platform (system browser, webview, deep link).

use crate::api::error::{require, ApiResult};
use crate::api::query::QueryBuilder;
use crate::api::types::{
    AuthenticateParams, LogoutParams, PasswordlessAuthenticateParams, SignTransactionParams,
};

/// `GET {base}/sign?...`: ask the user to sign a transaction.
pub fn sign_transaction_url(base_url: &str, params: &SignTransactionParams) -> ApiResult<String> {
    let account = require(&params.account, "account")?;
    let app_access_token = require(&params.app_access_token, "app_access_token")?;
    let callback_url = require(&params.callback_url, "callback_url")?;
    let chain_account = require(&params.chain_account, "chain_account")?;
    let chain_network = require(&params.chain_network, "chain_network")?;
    let state = require(&params.state, "state")?;
    let transaction = require(&params.transaction, "transaction")?;

    Ok(QueryBuilder::new(base_url, "/sign")
        .param("account", account)
        .param("allow_chain_account_selection", &params.allow_chain_account_selection)
        .param("app_access_token", app_access_token)
        .param("broadcast", &params.broadcast)
        .param("callback_url", callback_url)
        .param("chain_account", chain_account)
        .param("chain_network", chain_network)
        .param("return_signed_transaction", &params.return_signed_transaction)
        .param("state", state)
        .param("transaction", transaction)
        .build())
}

/// `GET {base}/auth?...`: log a user in with a social or passwordless provider.
pub fn authenticate_url(base_url: &str, params: &AuthenticateParams) -> ApiResult<String> {
    let app_access_token = require(&params.app_access_token, "app_access_token")?;
    let callback_url = require(&params.callback_url, "callback_url")?;
    let background_color = require(&params.background_color, "background_color")?;

    Ok(QueryBuilder::new(base_url, "/auth")
        .param("app_access_token", app_access_token)
        .param("provider", &params.provider)
        .param("callback_url", callback_url)
        .param("background_color", background_color)
        .param_if_present("state", params.state.as_deref())
        .build())
}

/// `GET {base}/auth?...`: finish a passwordless login with the code the user received.
pub fn passwordless_authenticate_url(
    base_url: &str,
    params: &PasswordlessAuthenticateParams,
) -> ApiResult<String> {
    let app_access_token = require(&params.app_access_token, "app_access_token")?;
    let callback_url = require(&params.callback_url, "callback_url")?;
    let background_color = require(&params.background_color, "background_color")?;
    let state = require(&params.state, "state")?;
    let email_or_phone = require(&params.email_or_phone, "email_or_phone")?;

    Ok(QueryBuilder::new(base_url, "/auth")
        .param("app_access_token", app_access_token)
        .param("provider", &params.provider)
        .param("callback_url", callback_url)
        .param("background_color", background_color)
        .param("state", state)
        .param("email", email_or_phone)
        .param("code", &params.code)
        .build())
}

/// `GET {base}/logout?...`: clear the user's login tokens on the ORE ID domain.
pub fn logout_url(base_url: &str, params: &LogoutParams) -> ApiResult<String> {
    let app_id = require(&params.app_id, "app_id")?;
    let providers = require(&params.providers, "providers")?;
    let callback_url = require(&params.callback_url, "callback_url")?;

    Ok(QueryBuilder::new(base_url, "/logout")
        .param("app_id", app_id)
        .param("providers", providers)
        .param("callback_url", callback_url)
        .param_if_present("state", params.state.as_deref())
        .build())
}
