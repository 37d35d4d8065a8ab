//! Token airdrop types.

use serde::{Deserialize, Serialize};

/// Request for POST /api/token/airdrop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAirdropRequest {
    /// Amount as a decimal string (e.g. `"1.0000"`)
    pub amount: String,
    /// Token symbol
    pub symbol: String,
    /// Recipient chain account
    pub chain_account: String,
    pub chain_network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl TokenAirdropRequest {
    pub fn new(
        amount: impl Into<String>,
        symbol: impl Into<String>,
        chain_account: impl Into<String>,
        chain_network: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            symbol: symbol.into(),
            chain_account: chain_account.into(),
            chain_network: chain_network.into(),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Response for POST /api/token/airdrop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAirdropResponse {
    #[serde(default)]
    pub process_id: Option<String>,
    /// On-chain transaction ID of the transfer
    #[serde(default)]
    pub transaction_id: Option<String>,
}
