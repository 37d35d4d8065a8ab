//! Account types: user records, permissions, login providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::query::ToQueryValue;
use crate::api::types::null_as_default;

/// Login provider supported by ORE ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Twitter,
    Facebook,
    #[serde(rename = "linkedin")]
    LinkedIn,
    Twitch,
    /// Passwordless login via SMS code
    Phone,
    /// Passwordless login via email code
    Email,
}

impl Provider {
    /// Wire name used in query strings and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Twitter => "twitter",
            Provider::Facebook => "facebook",
            Provider::LinkedIn => "linkedin",
            Provider::Twitch => "twitch",
            Provider::Phone => "phone",
            Provider::Email => "email",
        }
    }

    /// Whether this provider logs in with a one-time code.
    pub fn is_passwordless(&self) -> bool {
        matches!(self, Provider::Phone | Provider::Email)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "twitter" => Ok(Provider::Twitter),
            "facebook" => Ok(Provider::Facebook),
            "linkedin" => Ok(Provider::LinkedIn),
            "twitch" => Ok(Provider::Twitch),
            "phone" => Ok(Provider::Phone),
            "email" => Ok(Provider::Email),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

impl ToQueryValue for Provider {
    fn to_query_value(&self) -> String {
        self.as_str().to_string()
    }
}

/// A key/permission attached to a user's chain account.
///
/// The service may send `null` for any string field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[serde(default)]
    pub chain_network: Option<String>,
    #[serde(default)]
    pub chain_account: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    /// Permission name (e.g. `active`, `owner`)
    #[serde(default)]
    pub permission: Option<String>,
    #[serde(rename = "privateKeyStoredExterally", default)]
    pub private_key_stored_externally: bool,
    #[serde(default)]
    pub external_wallet_type: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

/// Response for GET /api/account/user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub process_id: Option<String>,
    /// ORE ID account name
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Empty when the service sends `null`
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: Vec<Permission>,
}

impl UserInfo {
    /// Permissions held on the given chain network.
    pub fn permissions_on<'a>(&'a self, chain_network: &'a str) -> impl Iterator<Item = &'a Permission> {
        self.permissions
            .iter()
            .filter(move |p| p.chain_network.as_deref() == Some(chain_network))
    }
}

/// Query parameters for GET /api/account/add-permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPermissionParams {
    /// ORE ID account
    pub account: String,
    /// New permission name (12 chars, EOS account naming rules)
    pub permission: String,
    /// Parent permission (default: `active`)
    pub parent_permission: String,
    /// Wallet provider holding the key
    pub wallet_type: String,
    pub chain_account: String,
    pub chain_network: String,
    /// Public key to add
    pub public_key: String,
}

impl AddPermissionParams {
    /// Create params with `parent_permission` set to `active`.
    pub fn new(
        account: impl Into<String>,
        permission: impl Into<String>,
        wallet_type: impl Into<String>,
        chain_account: impl Into<String>,
        chain_network: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            permission: permission.into(),
            parent_permission: "active".to_string(),
            wallet_type: wallet_type.into(),
            chain_account: chain_account.into(),
            chain_network: chain_network.into(),
            public_key: public_key.into(),
        }
    }

    pub fn with_parent_permission(mut self, parent: impl Into<String>) -> Self {
        self.parent_permission = parent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_wire_names() {
        assert_eq!(Provider::LinkedIn.to_query_value(), "linkedin");
        assert_eq!(serde_json::to_string(&Provider::LinkedIn).unwrap(), r#""linkedin""#);
        assert_eq!(serde_json::to_string(&Provider::Email).unwrap(), r#""email""#);
        assert_eq!("Facebook".parse::<Provider>().unwrap(), Provider::Facebook);
        assert!("myspace".parse::<Provider>().is_err());
        assert_eq!(
            vec![Provider::Google, Provider::Twitch].to_query_value(),
            "google,twitch"
        );
    }

    #[test]
    fn test_passwordless_providers() {
        assert!(Provider::Phone.is_passwordless());
        assert!(Provider::Email.is_passwordless());
        assert!(!Provider::Google.is_passwordless());
    }

    #[test]
    fn test_user_info_deserialize() {
        let json = r#"{
            "processId": "p1",
            "accountName": "ore1siwzstth",
            "email": "someone@example.com",
            "picture": null,
            "name": "Some One",
            "username": "someone",
            "permissions": [
                {
                    "chainNetwork": "eos_kylin",
                    "chainAccount": "ore1siwzstth",
                    "publicKey": "EOS8RTHA4WX",
                    "privateKeyStoredExterally": false,
                    "externalWalletType": null,
                    "accountType": "native",
                    "isVerified": true,
                    "permission": "active"
                },
                {
                    "chainNetwork": "eth_main",
                    "chainAccount": "0xabc",
                    "permission": "owner"
                }
            ]
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.account_name.as_deref(), Some("ore1siwzstth"));
        assert!(user.picture.is_none());
        assert_eq!(user.permissions.len(), 2);
        assert!(user.permissions[0].is_verified);
        assert!(!user.permissions[1].private_key_stored_externally);

        let kylin: Vec<_> = user.permissions_on("eos_kylin").collect();
        assert_eq!(kylin.len(), 1);
        assert_eq!(kylin[0].permission.as_deref(), Some("active"));
    }

    #[test]
    fn test_user_info_null_fields() {
        let json = r#"{"processId":"p1","accountName":null,"permissions":null}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(user.account_name.is_none());
        assert!(user.permissions.is_empty());

        let json = r#"{
            "processId": "p1",
            "accountName": "abc123",
            "permissions": [
                {"chainNetwork": "eos_kylin", "chainAccount": null, "publicKey": null, "permission": null}
            ]
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        let permission = &user.permissions[0];
        assert!(permission.chain_account.is_none());
        assert!(permission.permission.is_none());
        assert_eq!(user.permissions_on("eos_kylin").count(), 1);
    }

    #[test]
    fn test_add_permission_params_defaults() {
        let params = AddPermissionParams::new("acct", "perm1", "scatter", "chainacct", "eos_kylin", "EOS123");
        assert_eq!(params.parent_permission, "active");

        let params = params.with_parent_permission("owner");
        assert_eq!(params.parent_permission, "owner");
    }
}
