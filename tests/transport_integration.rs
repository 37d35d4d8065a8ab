//! HTTP-level integration tests for the default reqwest transport.
//!
//! Uses `wiremock` to stand in for the ORE ID service and checks the exact
//! method, path, query, headers and body that go over the wire.

#![cfg(feature = "http")]

use oreid_sdk::api::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer, service_key: Option<&str>) -> OreIdClient {
    let mut builder = OreIdClient::builder()
        .base_url(server.uri())
        .api_key("t_k_wire")
        .timeout_secs(5);
    if let Some(key) = service_key {
        builder = builder.service_key(key);
    }
    builder.build().unwrap()
}

// ============================================================================
// GET ENDPOINTS
// ============================================================================

mod get_requests {
    use super::*;

    #[tokio::test]
    async fn test_get_user_over_http() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/account/user"))
            .and(query_param("account", "abc123"))
            .and(header("api-key", "t_k_wire"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "processId": "p1",
                "accountName": "abc123",
                "permissions": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server, None).await.get_user("abc123").await.unwrap();
        assert_eq!(user.account_name.as_deref(), Some("abc123"));
        assert!(user.permissions.is_empty());
    }

    #[tokio::test]
    async fn test_remote_error_body_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/account/user"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .await
            .get_user("abc123")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "bad request");
        assert_eq!(err.status_code(), Some(400));
    }

    #[tokio::test]
    async fn test_passwordless_send_code_escapes_email() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/account/login-passwordless-send-code"))
            .and(query_param("provider", "email"))
            .and(query_param("email", "someone+x@example.com"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"processId": "p2", "success": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server, None)
            .await
            .passwordless_send_code(Provider::Email, "someone+x@example.com")
            .await
            .unwrap();
        assert!(response.success);
    }
}

// ============================================================================
// POST ENDPOINTS
// ============================================================================

mod post_requests {
    use super::*;

    #[tokio::test]
    async fn test_app_token_body_and_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/app-token"))
            .and(header("api-key", "t_k_wire"))
            .and(header("service-key", "s_k_wire"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "newAccountPassword": null,
                "currentAccountPassword": null
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "processId": "p3",
                "appAccessToken": "token-abc"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let token = client_for(&server, Some("s_k_wire"))
            .await
            .get_app_token(&AppTokenRequest::default())
            .await
            .unwrap();
        assert_eq!(token.app_access_token.as_deref(), Some("token-abc"));
    }

    #[tokio::test]
    async fn test_token_airdrop_over_http() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/token/airdrop"))
            .and(header("service-key", "s_k_wire"))
            .and(body_json(json!({
                "amount": "5.0000",
                "symbol": "ORE",
                "chain_account": "ore1siwzstth",
                "chain_network": "ore_test"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "processId": "p4",
                "transactionId": "abcdef"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server, Some("s_k_wire"))
            .await
            .token_airdrop(&TokenAirdropRequest::new("5.0000", "ORE", "ore1siwzstth", "ore_test"))
            .await
            .unwrap();
        assert_eq!(response.transaction_id.as_deref(), Some("abcdef"));
    }

    #[tokio::test]
    async fn test_opaque_success_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/custodial/change-password"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .mount(&server)
            .await;

        let value = client_for(&server, Some("s_k_wire"))
            .await
            .custodial_change_password(&CustodialChangePasswordRequest::new("acct", "old", "new"))
            .await
            .unwrap();
        assert_eq!(value, json!("OK"));
    }

    #[tokio::test]
    async fn test_missing_service_key_never_hits_server() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .await
            .custodial_create_user(&CustodialCreateUserRequest::new("n", "u", "pw", "native"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingArgument("service_key")));
    }
}

// ============================================================================
// TRANSPORT CONFIGURATION
// ============================================================================

mod transport_config {
    use super::*;

    #[tokio::test]
    async fn test_builder_default_headers_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/services/config"))
            .and(query_param("type", "chains"))
            .and(header("x-app-version", "1.2.3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "processId": "p5",
                "values": {"chains": []}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OreIdClient::builder()
            .base_url(format!("{}/", server.uri()))
            .api_key("t_k_wire")
            .header("x-app-version", "1.2.3")
            .build()
            .unwrap();

        let config = client.get_chains().await.unwrap();
        assert!(config.values.chains.is_empty());
    }

    #[test]
    fn test_reqwest_transport_try_new() {
        assert!(ReqwestTransport::try_new().is_ok());
    }

    #[test]
    fn test_invalid_default_header_rejected() {
        let result = OreIdClient::builder()
            .api_key("t_k_wire")
            .header("bad header", "value")
            .build();
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let client = OreIdClient::builder()
            .base_url("http://127.0.0.1:1")
            .api_key("t_k_wire")
            .timeout_secs(2)
            .build()
            .unwrap();

        let err = client.get_chains().await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }
}
