//! Deferred-validation builder producing a ready-to-use [`OAuth`] client.
//!
//! Setters only record values. [`OAuthBuilder::validate`] runs the single validation pass, in a
//! fixed order where the first failure wins:
//!
//! 1. presence of `environment`, `client_id`, `client_secret`, `token_storage`, then the
//!    `api_key`/`api_secret` pairing (empty strings count as unset),
//! 2. environment support,
//! 3. redirect URI syntax, whenever one was set (an empty redirect URI is invalid, not unset).

// self
use crate::{
	_prelude::*,
	clock::{Clock, SystemClock},
	config::{ApiCredentials, Environment, OAuthConfig},
	error::ConfigError,
	flows::OAuth,
	http::TokenHttpClient,
	nonce::{NonceGenerator, RandomBytesNonceGenerator},
	store::TokenStorage,
	tokens::TokenSecret,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Collects client parameters and assembles an [`OAuth`] client.
#[derive(Clone, Default)]
pub struct OAuthBuilder {
	/// Deployment name, e.g. `sandbox` or `production`.
	pub environment: Option<String>,
	/// OAuth client identifier.
	pub client_id: Option<String>,
	/// OAuth client secret.
	pub client_secret: Option<String>,
	/// Redirect URI registered for the authorization code grant.
	pub redirect_uri: Option<String>,
	/// Storage the refresh grant reads the current refresh token from.
	pub token_storage: Option<Arc<dyn TokenStorage>>,
	/// API key for the `api_keys` grant.
	pub api_key: Option<String>,
	/// API secret for the `api_keys` grant.
	pub api_secret: Option<String>,
	/// Nonce source; defaults to [`RandomBytesNonceGenerator`].
	pub nonce_generator: Option<Arc<dyn NonceGenerator>>,
	/// Time source; defaults to [`SystemClock`].
	pub clock: Option<Arc<dyn Clock>>,
}
impl OAuthBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the deployment, either by name or as an [`Environment`].
	pub fn environment(mut self, environment: impl Into<String>) -> Self {
		self.environment = Some(environment.into());

		self
	}

	/// Sets the OAuth client identifier.
	pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Sets the OAuth client secret.
	pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
		self.client_secret = Some(client_secret.into());

		self
	}

	/// Sets the redirect URI.
	pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}

	/// Sets the token storage.
	pub fn token_storage(mut self, token_storage: Arc<dyn TokenStorage>) -> Self {
		self.token_storage = Some(token_storage);

		self
	}

	/// Sets the API key.
	pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
		self.api_key = Some(api_key.into());

		self
	}

	/// Sets the API secret.
	pub fn api_secret(mut self, api_secret: impl Into<String>) -> Self {
		self.api_secret = Some(api_secret.into());

		self
	}

	/// Overrides the nonce generator.
	pub fn nonce_generator(mut self, nonce_generator: Arc<dyn NonceGenerator>) -> Self {
		self.nonce_generator = Some(nonce_generator);

		self
	}

	/// Overrides the clock.
	pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock = Some(clock);

		self
	}

	/// Runs the validation pass and returns the resulting configuration.
	pub fn validate(&self) -> Result<OAuthConfig, ConfigError> {
		let environment =
			required(&self.environment, "environment", "OAuthBuilder::environment")?;
		let client_id = required(&self.client_id, "client_id", "OAuthBuilder::client_id")?;
		let client_secret =
			required(&self.client_secret, "client_secret", "OAuthBuilder::client_secret")?;

		if self.token_storage.is_none() {
			return Err(ConfigError::missing("token_storage", "OAuthBuilder::token_storage"));
		}

		let api_credentials = match (present(&self.api_key), present(&self.api_secret)) {
			(Some(key), Some(secret)) =>
				Some(ApiCredentials { key: key.to_owned(), secret: TokenSecret::new(secret) }),
			(Some(_), None) =>
				return Err(ConfigError::missing("api_secret", "OAuthBuilder::api_secret")),
			(None, Some(_)) => return Err(ConfigError::missing("api_key", "OAuthBuilder::api_key")),
			(None, None) => None,
		};
		let environment = environment.parse::<Environment>()?;
		let redirect_uri = self.redirect_uri.as_deref().map(validate_redirect_uri).transpose()?;

		Ok(OAuthConfig {
			environment,
			client_id: client_id.to_owned(),
			client_secret: TokenSecret::new(client_secret),
			redirect_uri,
			api_credentials,
		})
	}

	/// Validates the parameters and assembles a client on a reqwest transport that never follows
	/// redirects.
	#[cfg(feature = "reqwest")]
	pub fn build(self) -> Result<OAuth<ReqwestHttpClient>> {
		self.validate()?;

		let http_client = ReqwestHttpClient::without_redirects()?;

		self.build_with_http_client(http_client)
	}

	/// Validates the parameters and assembles a client on the provided transport.
	pub fn build_with_http_client<C>(self, http_client: impl Into<Arc<C>>) -> Result<OAuth<C>>
	where
		C: ?Sized + TokenHttpClient,
	{
		let config = self.validate()?;
		let Self { token_storage, nonce_generator, clock, .. } = self;
		let token_storage = token_storage
			.ok_or(ConfigError::missing("token_storage", "OAuthBuilder::token_storage"))?;
		let nonce_generator =
			nonce_generator.unwrap_or_else(|| Arc::new(RandomBytesNonceGenerator));
		let clock = clock.unwrap_or_else(|| Arc::new(SystemClock));

		Ok(OAuth::new(config, token_storage, http_client.into(), nonce_generator, clock))
	}
}
impl Debug for OAuthBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthBuilder")
			.field("environment", &self.environment)
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("redirect_uri", &self.redirect_uri)
			.field("token_storage_set", &self.token_storage.is_some())
			.field("api_key", &self.api_key)
			.field("api_secret_set", &self.api_secret.is_some())
			.finish_non_exhaustive()
	}
}

fn present(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|value| !value.is_empty())
}

fn required<'a>(
	value: &'a Option<String>,
	parameter: &'static str,
	setter: &'static str,
) -> Result<&'a str, ConfigError> {
	present(value).ok_or(ConfigError::missing(parameter, setter))
}

fn validate_redirect_uri(uri: &str) -> Result<String, ConfigError> {
	match Url::parse(uri) {
		Ok(url) if url.has_host() => Ok(uri.to_owned()),
		_ => Err(ConfigError::InvalidRedirectUri { uri: uri.to_owned() }),
	}
}
