//! Custodial account management types (ORE ID Enterprise, service key required).

use serde::{Deserialize, Serialize};

/// Request for POST /api/custodial/change-password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodialChangePasswordRequest {
    pub account: String,
    pub current_password: String,
    pub new_password: String,
}

impl CustodialChangePasswordRequest {
    pub fn new(
        account: impl Into<String>,
        current_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            current_password: current_password.into(),
            new_password: new_password.into(),
        }
    }
}

/// Request for POST /api/custodial/migrate-account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodialMigrateAccountRequest {
    pub account: String,
    pub chain_account: String,
    pub chain_network: String,
    pub user_password: String,
    /// Target account type (e.g. `native`)
    pub to_type: String,
}

impl CustodialMigrateAccountRequest {
    pub fn new(
        account: impl Into<String>,
        chain_account: impl Into<String>,
        chain_network: impl Into<String>,
        user_password: impl Into<String>,
        to_type: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            chain_account: chain_account.into(),
            chain_network: chain_network.into(),
            user_password: user_password.into(),
            to_type: to_type.into(),
        }
    }
}

/// Request for POST /api/custodial/new-user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodialCreateUserRequest {
    pub name: String,
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub user_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// `native` or `pending`
    pub account_type: String,
}

impl CustodialCreateUserRequest {
    pub fn new(
        name: impl Into<String>,
        user_name: impl Into<String>,
        user_password: impl Into<String>,
        account_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            user_name: user_name.into(),
            email: None,
            picture: None,
            user_password: user_password.into(),
            phone: None,
            account_type: account_type.into(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }
}

/// Request for POST /api/custodial/new-chain-account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChainAccountRequest {
    /// ORE ID account that will own the chain account
    pub account_name: String,
    pub account_type: String,
    pub chain_network: String,
    pub user_password: String,
}

impl CreateChainAccountRequest {
    pub fn new(
        account_name: impl Into<String>,
        account_type: impl Into<String>,
        chain_network: impl Into<String>,
        user_password: impl Into<String>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            account_type: account_type.into(),
            chain_network: chain_network.into(),
            user_password: user_password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_omits_unset_contact_fields() {
        let request = CustodialCreateUserRequest::new("Some One", "someone", "pw", "native")
            .with_email("someone@example.com");
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""email":"someone@example.com""#));
        assert!(json.contains(r#""user_name":"someone""#));
        assert!(!json.contains("phone"));
        assert!(!json.contains("picture"));
    }

    #[test]
    fn test_migrate_request_field_names() {
        let request = CustodialMigrateAccountRequest::new("acct", "chainacct", "eos_kylin", "pw", "native");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["to_type"], "native");
        assert_eq!(value["chain_network"], "eos_kylin");
    }
}
