//! Token exchange client and its per-grant operations.

pub mod auth_code_pkce;

mod api_key;
mod common;
mod refresh;

pub use auth_code_pkce::*;

// self
use crate::{
	_prelude::*,
	clock::Clock,
	config::OAuthConfig,
	http::TokenHttpClient,
	nonce::NonceGenerator,
	store::TokenStorage,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestOAuth = OAuth<ReqwestHttpClient>;

/// Exchanges credentials for [`PenneoTokens`](crate::PenneoTokens) against one Penneo
/// deployment.
///
/// Built by [`OAuthBuilder`](crate::OAuthBuilder). Every collaborator sits behind an [`Arc`], so
/// clones are cheap and share the same transport, storage, nonce generator, and clock. Each call
/// is an independent request; nothing is retried and nothing is written back to storage.
pub struct OAuth<C>
where
	C: ?Sized + TokenHttpClient,
{
	config: Arc<OAuthConfig>,
	token_storage: Arc<dyn TokenStorage>,
	http_client: Arc<C>,
	nonce_generator: Arc<dyn NonceGenerator>,
	clock: Arc<dyn Clock>,
}
impl<C> OAuth<C>
where
	C: ?Sized + TokenHttpClient,
{
	pub(crate) fn new(
		config: OAuthConfig,
		token_storage: Arc<dyn TokenStorage>,
		http_client: Arc<C>,
		nonce_generator: Arc<dyn NonceGenerator>,
		clock: Arc<dyn Clock>,
	) -> Self {
		Self { config: Arc::new(config), token_storage, http_client, nonce_generator, clock }
	}

	/// Validated configuration the client was built with.
	pub fn config(&self) -> &OAuthConfig {
		&self.config
	}

	/// Storage the refresh grant reads from.
	pub fn token_storage(&self) -> &Arc<dyn TokenStorage> {
		&self.token_storage
	}

	/// Transport used for every token endpoint call.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}
}
impl<C> Clone for OAuth<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			token_storage: self.token_storage.clone(),
			http_client: self.http_client.clone(),
			nonce_generator: self.nonce_generator.clone(),
			clock: self.clock.clone(),
		}
	}
}
impl<C> Debug for OAuth<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth").field("config", &self.config).finish_non_exhaustive()
	}
}
