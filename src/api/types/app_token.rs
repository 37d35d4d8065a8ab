//! App access token types.

use serde::{Deserialize, Serialize};

/// Request for POST /api/app-token.
///
/// Both fields are always serialized, as `null` when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTokenRequest {
    /// Password to set on a new custodial account
    pub new_account_password: Option<String>,
    /// Current password of a custodial account
    pub current_account_password: Option<String>,
}

impl AppTokenRequest {
    pub fn with_new_account_password(mut self, password: impl Into<String>) -> Self {
        self.new_account_password = Some(password.into());
        self
    }

    pub fn with_current_account_password(mut self, password: impl Into<String>) -> Self {
        self.current_account_password = Some(password.into());
        self
    }
}

/// Response for POST /api/app-token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTokenResponse {
    /// Correlation ID for this flow
    #[serde(default)]
    pub process_id: Option<String>,
    /// Short-lived token used by the redirect flows
    #[serde(default)]
    pub app_access_token: Option<String>,
}
