//! Validated OAuth client configuration.
//!
//! [`OAuthConfig`] values are only produced by
//! [`OAuthBuilder::validate`](crate::OAuthBuilder::validate), so every instance already satisfies
//! the presence, environment, and redirect URI rules.

mod environment;

pub use environment::Environment;

// self
use crate::{_prelude::*, tokens::TokenSecret};

/// API key and secret used by the `api_keys` grant.
#[derive(Clone, Debug)]
pub struct ApiCredentials {
	/// Public API key sent with the exchange.
	pub key: String,
	/// API secret; only its digest leaves the process.
	pub secret: TokenSecret,
}

/// Immutable client configuration shared by every exchange.
#[derive(Clone)]
pub struct OAuthConfig {
	pub(crate) environment: Environment,
	pub(crate) client_id: String,
	pub(crate) client_secret: TokenSecret,
	pub(crate) redirect_uri: Option<String>,
	pub(crate) api_credentials: Option<ApiCredentials>,
}
impl OAuthConfig {
	/// Deployment the client talks to.
	pub fn environment(&self) -> Environment {
		self.environment
	}

	/// OAuth client identifier.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// OAuth client secret.
	pub fn client_secret(&self) -> &TokenSecret {
		&self.client_secret
	}

	/// Redirect URI exactly as configured.
	pub fn redirect_uri(&self) -> Option<&str> {
		self.redirect_uri.as_deref()
	}

	/// API key pair, when configured.
	pub fn api_credentials(&self) -> Option<&ApiCredentials> {
		self.api_credentials.as_ref()
	}
}
impl Debug for OAuthConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthConfig")
			.field("environment", &self.environment)
			.field("client_id", &self.client_id)
			.field("redirect_uri", &self.redirect_uri)
			.field("api_key", &self.api_credentials.as_ref().map(|creds| creds.key.as_str()))
			.finish()
	}
}
