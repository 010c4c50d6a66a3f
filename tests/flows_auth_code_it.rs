#![cfg(feature = "reqwest")]

mod common;

// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use penneo_oauth::{Error, error::ConfigError, flows::PkcePair, store::MemoryTokenStorage};

#[tokio::test]
async fn code_exchange_posts_json_and_parses_tokens() {
	let server = MockServer::start_async().await;
	let oauth = mock_client(&server, base_builder(seeded_storage(None)));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.header("content-type", "application/json")
				.header("accept", "application/json")
				.json_body(json!({
					"grant_type": "authorization_code",
					"client_id": CLIENT_ID,
					"client_secret": CLIENT_SECRET,
					"code": "auth-code",
					"redirect_uri": REDIRECT_URI,
					"code_verifier": "verifier-123",
				}));
			then.status(200).header("content-type", "application/json").body(token_body());
		})
		.await;
	let tokens = oauth
		.exchange_authorization_code("auth-code", "verifier-123")
		.await
		.expect("Code exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(tokens.access_token().expose(), "access-new");
	assert_eq!(tokens.refresh_token().map(|secret| secret.expose()), Some("refresh-new"));
	assert_eq!(tokens.access_token_expires_at().unix_timestamp(), ACCESS_EXPIRES_AT);
	assert_eq!(
		tokens.refresh_token_expires_at().map(|instant| instant.unix_timestamp()),
		Some(REFRESH_EXPIRES_AT)
	);
}

#[tokio::test]
async fn code_exchange_sends_null_redirect_when_unset() {
	let server = MockServer::start_async().await;
	let mut builder = base_builder(seeded_storage(None));

	builder.redirect_uri = None;

	let oauth = mock_client(&server, builder);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token").json_body(json!({
				"grant_type": "authorization_code",
				"client_id": CLIENT_ID,
				"client_secret": CLIENT_SECRET,
				"code": "auth-code",
				"redirect_uri": null,
				"code_verifier": "verifier-123",
			}));
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"access_token":"a","access_token_expires_at":100}"#);
		})
		.await;
	let tokens = oauth
		.exchange_authorization_code("auth-code", "verifier-123")
		.await
		.expect("Code exchange without a redirect URI should succeed.");

	mock.assert_async().await;

	assert_eq!(tokens.access_token().expose(), "a");
	assert!(tokens.refresh_token().is_none());
	assert!(tokens.refresh_token_expires_at().is_none());
}

#[tokio::test]
async fn rejected_code_exchange_reports_status_and_error() {
	let server = MockServer::start_async().await;
	let oauth = mock_client(&server, base_builder(seeded_storage(None)));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(401)
				.header("content-type", "application/json")
				.body(r#"{"error":"invalid_client"}"#);
		})
		.await;
	let err = oauth
		.exchange_authorization_code("auth-code", "verifier-123")
		.await
		.expect_err("Rejected exchanges should fail.");

	mock.assert_async().await;

	assert!(matches!(
		err,
		Error::AuthExchangeFailed { action: "exchange code", status: 401, .. }
	));
	assert_eq!(err.to_string(), "Failed to exchange code: HTTP 401, invalid_client");
}

#[tokio::test]
async fn malformed_success_body_is_reported() {
	let server = MockServer::start_async().await;
	let oauth = mock_client(&server, base_builder(seeded_storage(None)));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"token":"not-what-we-expect"}"#);
		})
		.await;
	let err = oauth
		.exchange_authorization_code("auth-code", "verifier-123")
		.await
		.expect_err("Incomplete token bodies should fail.");

	mock.assert_async().await;

	assert!(matches!(err, Error::MalformedResponse { status: 200, .. }));
}

#[test]
fn authorization_url_carries_every_parameter() {
	let oauth = mock_client_at("http://127.0.0.1:1", base_builder(seeded_storage(None)));
	let pkce = PkcePair::generate();
	let url = oauth
		.authorization_url(["full_access", "offline"], pkce.challenge(), Some("state-123"))
		.expect("Authorization URL should build when a redirect URI is configured.");

	assert_eq!(url.scheme(), "https");
	assert_eq!(url.host_str(), Some("sandbox.oauth.penneo.cloud"));
	assert_eq!(url.path(), "/oauth/authorize");

	let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();
	let value = |key: &str| {
		pairs.iter().find(|(name, _)| name == key).map(|(_, value)| value.as_str())
	};

	assert_eq!(value("response_type"), Some("code"));
	assert_eq!(value("client_id"), Some(CLIENT_ID));
	assert_eq!(value("redirect_uri"), Some(REDIRECT_URI));
	assert_eq!(value("scope"), Some("full_access offline"));
	assert_eq!(value("code_challenge"), Some(pkce.challenge()));
	assert_eq!(value("code_challenge_method"), Some("S256"));
	assert_eq!(value("state"), Some("state-123"));
}

#[test]
fn authorization_url_omits_empty_scope_and_state() {
	let oauth = mock_client_at("http://127.0.0.1:1", base_builder(seeded_storage(None)));
	let url = oauth
		.authorization_url(Vec::<String>::new(), "challenge", None)
		.expect("Authorization URL should build without scopes.");
	let keys = url.query_pairs().map(|(key, _)| key.into_owned()).collect::<Vec<_>>();

	assert!(!keys.iter().any(|key| key == "scope"));
	assert!(!keys.iter().any(|key| key == "state"));
}

#[test]
fn authorization_url_requires_redirect_uri() {
	let mut builder = base_builder(Arc::new(MemoryTokenStorage::default()));

	builder.redirect_uri = None;

	let oauth = mock_client_at("http://127.0.0.1:1", builder);
	let err = oauth
		.authorization_url(["full_access"], "challenge", None)
		.expect_err("Authorization URLs need a redirect URI.");

	assert!(matches!(
		err,
		Error::Config(ConfigError::MissingParameter { parameter: "redirect_uri", .. })
	));
}
