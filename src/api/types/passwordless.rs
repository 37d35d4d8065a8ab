//! Passwordless (email / SMS code) login responses.

use serde::{Deserialize, Serialize};

/// Response for GET /api/account/login-passwordless-send-code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordlessSendCodeResponse {
    #[serde(default)]
    pub process_id: Option<String>,
    /// Whether the code was sent
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response for GET /api/account/login-passwordless-verify-code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordlessVerifyCodeResponse {
    #[serde(default)]
    pub process_id: Option<String>,
    /// Whether the code matched
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
