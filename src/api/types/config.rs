//! Chain configuration types returned by GET /api/services/config.

use serde::{Deserialize, Serialize};

use crate::api::types::null_as_default;

/// `type` value that returns the configuration of every supported chain.
pub const CONFIG_TYPE_CHAINS: &str = "chains";

/// Response for GET /api/services/config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainsConfiguration {
    #[serde(default)]
    pub process_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: ConfigValues,
}

/// Configuration payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigValues {
    #[serde(default, deserialize_with = "null_as_default")]
    pub chains: Vec<Chain>,
}

/// A chain network supported by ORE ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// Network nickname (e.g. `eos_kylin`), used as `chain_network` elsewhere
    #[serde(default)]
    pub network: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Chain family (e.g. `eos`, `ethereum`)
    #[serde(rename = "type", default)]
    pub chain_type: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub is_test_network: bool,
    #[serde(default)]
    pub block_explorer_account_url: Option<String>,
    #[serde(default)]
    pub block_explorer_tx_url: Option<String>,
    /// RPC endpoints
    #[serde(default, deserialize_with = "null_as_default")]
    pub hosts: Vec<Host>,
    #[serde(default)]
    pub chain_communication_settings: Option<ChainCommunicationSettings>,
    #[serde(default)]
    pub default_transaction_settings: Option<DefaultTransactionSettings>,
    #[serde(default)]
    pub create_bridge_contract: Option<String>,
    #[serde(default)]
    pub dfuse_network: Option<String>,
    #[serde(default)]
    pub monitor_config: Option<MonitorConfig>,
    #[serde(rename = "dFuseSupported", default)]
    pub dfuse_supported: Option<bool>,
}

/// RPC host of a chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub chain_id: Option<String>,
    /// Number or string depending on the chain
    #[serde(default)]
    pub port: Option<serde_json::Value>,
    #[serde(default)]
    pub fork_name: Option<String>,
}

/// Block polling settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainCommunicationSettings {
    #[serde(default)]
    pub blocks_to_check: i64,
    #[serde(default)]
    pub check_interval_in_ms: i64,
    #[serde(default)]
    pub get_block_attempts: i64,
}

/// Defaults applied when composing transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultTransactionSettings {
    #[serde(default)]
    pub blocks_behind: i64,
    #[serde(default)]
    pub expire_seconds: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorConfig {
    #[serde(default)]
    pub dfuse_supported: bool,
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl ChainsConfiguration {
    /// Find a chain by its network nickname.
    pub fn chain(&self, network: &str) -> Option<&Chain> {
        self.values.chains.iter().find(|c| c.network.as_deref() == Some(network))
    }
}
