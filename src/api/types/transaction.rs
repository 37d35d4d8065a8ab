//! Transaction signing and composition types.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Encode a transaction object as the base64 JSON string ORE ID expects in
/// `transaction` fields.
pub fn encode_transaction(transaction: &serde_json::Value) -> String {
    STANDARD.encode(transaction.to_string())
}

/// Request for POST /api/transaction/sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodialSignTransactionRequest {
    pub account: String,
    /// Submit the transaction to the chain after signing
    pub broadcast: bool,
    pub chain_account: String,
    pub chain_network: String,
    /// Base64-encoded transaction JSON
    pub transaction: String,
    pub user_password: String,
}

impl CustodialSignTransactionRequest {
    /// Create a request that signs without broadcasting.
    pub fn new(
        account: impl Into<String>,
        chain_account: impl Into<String>,
        chain_network: impl Into<String>,
        transaction: impl Into<String>,
        user_password: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            broadcast: false,
            chain_account: chain_account.into(),
            chain_network: chain_network.into(),
            transaction: transaction.into(),
            user_password: user_password.into(),
        }
    }

    pub fn with_broadcast(mut self, broadcast: bool) -> Self {
        self.broadcast = broadcast;
        self
    }
}

/// Documented success shape of POST /api/transaction/sign.
///
/// The client returns the sign result as opaque JSON; decode it with
/// `serde_json::from_value::<CustodialSignTransactionResponse>(value)` when the
/// service answers in this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodialSignTransactionResponse {
    #[serde(default)]
    pub signed_transaction: Option<String>,
    #[serde(default)]
    pub process_id: Option<String>,
}

/// Request for POST /api/transaction/can-auto-sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanAutoSignRequest {
    pub account: String,
    pub chain_network: String,
    pub chain_account: String,
    /// Base64-encoded transaction JSON
    pub transaction: String,
}

impl CanAutoSignRequest {
    pub fn new(
        account: impl Into<String>,
        chain_network: impl Into<String>,
        chain_account: impl Into<String>,
        transaction: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            chain_network: chain_network.into(),
            chain_account: chain_account.into(),
            transaction: transaction.into(),
        }
    }
}

/// Response for POST /api/transaction/can-auto-sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanAutoSignResponse {
    #[serde(default)]
    pub auto_sign_credentials_exist: bool,
    #[serde(default)]
    pub can_create_auto_sign_credentials: bool,
    #[serde(default)]
    pub max_auto_sign_valid_for_in_seconds: i64,
}

/// Request for POST /api/transaction/compose-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionComposeActionRequest {
    pub chain_network: String,
    /// Action template name (e.g. `token_transfer`)
    pub chain_action_type: String,
    /// Template parameters. Sent as a nested JSON object, not as a
    /// string holding encoded JSON.
    pub action_params: serde_json::Value,
}

impl TransactionComposeActionRequest {
    pub fn new(
        chain_network: impl Into<String>,
        chain_action_type: impl Into<String>,
        action_params: serde_json::Value,
    ) -> Self {
        Self {
            chain_network: chain_network.into(),
            chain_action_type: chain_action_type.into(),
            action_params,
        }
    }
}
