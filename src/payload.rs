//! Token endpoint request bodies, one typed payload per grant.
//!
//! Payloads are built fresh for every call and serialize to the exact JSON field set the
//! platform expects, with the grant name inlined as `grant_type`. Builders are pure: the
//! API-key payload receives its nonce bytes and `created_at` string from the caller.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use sha1::{Digest, Sha1};
// self
use crate::{_prelude::*, config::OAuthConfig, error::ConfigError};

/// Request body for the token endpoint.
#[derive(Clone, Serialize)]
#[serde(tag = "grant_type", rename_all = "snake_case")]
pub enum GrantPayload<'a> {
	/// `grant_type=authorization_code`.
	AuthorizationCode(CodeExchangePayload<'a>),
	/// `grant_type=refresh_token`.
	RefreshToken(RefreshTokenPayload<'a>),
	/// `grant_type=api_keys`.
	ApiKeys(ApiKeyPayload<'a>),
}
impl<'a> GrantPayload<'a> {
	/// Builds the authorization code exchange body.
	pub fn authorization_code(
		config: &'a OAuthConfig,
		code: &'a str,
		code_verifier: &'a str,
	) -> Self {
		Self::AuthorizationCode(CodeExchangePayload {
			client_id: &config.client_id,
			client_secret: config.client_secret.expose(),
			code,
			redirect_uri: config.redirect_uri.as_deref(),
			code_verifier,
		})
	}

	/// Builds the refresh token body for the refresh token currently held in storage.
	pub fn refresh_token(config: &'a OAuthConfig, refresh_token: &'a str) -> Self {
		Self::RefreshToken(RefreshTokenPayload {
			refresh_token,
			redirect_uri: config.redirect_uri.as_deref(),
			client_id: &config.client_id,
			client_secret: config.client_secret.expose(),
		})
	}

	/// Builds the signed API-key body from raw nonce bytes and a formatted `created_at`.
	pub fn api_keys(
		config: &'a OAuthConfig,
		nonce: &[u8],
		created_at: String,
	) -> Result<Self, ConfigError> {
		let credentials = config
			.api_credentials
			.as_ref()
			.ok_or(ConfigError::missing("api_key", "OAuthBuilder::api_key"))?;
		let digest = api_key_digest(nonce, &created_at, credentials.secret.expose());

		Ok(Self::ApiKeys(ApiKeyPayload {
			client_id: &config.client_id,
			client_secret: config.client_secret.expose(),
			key: &credentials.key,
			nonce: STANDARD.encode(nonce),
			created_at,
			digest,
		}))
	}

	/// Wire name of the grant.
	pub const fn grant_type(&self) -> &'static str {
		match self {
			Self::AuthorizationCode(_) => "authorization_code",
			Self::RefreshToken(_) => "refresh_token",
			Self::ApiKeys(_) => "api_keys",
		}
	}

	/// Description of the exchange used in failure messages.
	pub const fn action(&self) -> &'static str {
		match self {
			Self::AuthorizationCode(_) => "exchange code",
			Self::RefreshToken(_) => "refresh tokens",
			Self::ApiKeys(_) => "exchange api key and secret for access token",
		}
	}
}
impl Debug for GrantPayload<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("GrantPayload")
			.field("grant_type", &self.grant_type())
			.finish_non_exhaustive()
	}
}

/// Fields of the `authorization_code` grant.
#[derive(Clone, Serialize)]
pub struct CodeExchangePayload<'a> {
	client_id: &'a str,
	client_secret: &'a str,
	code: &'a str,
	redirect_uri: Option<&'a str>,
	code_verifier: &'a str,
}

/// Fields of the `refresh_token` grant.
#[derive(Clone, Serialize)]
pub struct RefreshTokenPayload<'a> {
	refresh_token: &'a str,
	redirect_uri: Option<&'a str>,
	client_id: &'a str,
	client_secret: &'a str,
}

/// Fields of the `api_keys` grant.
#[derive(Clone, Serialize)]
pub struct ApiKeyPayload<'a> {
	client_id: &'a str,
	client_secret: &'a str,
	key: &'a str,
	created_at: String,
	nonce: String,
	digest: String,
}

/// Computes `base64(SHA-1(nonce || created_at || api_secret))`.
///
/// The platform verifies exactly this unkeyed construction, so it must not be replaced with an
/// HMAC.
pub fn api_key_digest(nonce: &[u8], created_at: &str, api_secret: &str) -> String {
	let mut hasher = Sha1::new();

	hasher.update(nonce);
	hasher.update(created_at.as_bytes());
	hasher.update(api_secret.as_bytes());

	STANDARD.encode(hasher.finalize())
}
