//! Refresh token grant.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	flows::{OAuth, common},
	http::TokenHttpClient,
	obs::{self, FlowKind},
	payload::GrantPayload,
	tokens::PenneoTokens,
};

impl<C> OAuth<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Exchanges the refresh token currently held in storage for a new token pair.
	///
	/// Storage is read at call time and never written; persisting the result is up to the
	/// caller. Fails with [`ConfigError::MissingRefreshToken`] before any request is sent when
	/// storage is empty or its tokens carry no refresh token. The Penneo platform SDKs instead
	/// post a `null` refresh token and surface the server's rejection; failing locally keeps a
	/// request that can never succeed off the wire.
	pub async fn refresh_tokens(&self) -> Result<PenneoTokens> {
		obs::observe(FlowKind::RefreshToken, "refresh_tokens", async {
			let current = self.token_storage.get_tokens().await?;
			let refresh_token = current
				.as_ref()
				.and_then(PenneoTokens::refresh_token)
				.ok_or(ConfigError::MissingRefreshToken)?;
			let endpoint = self.config.environment().token_endpoint();
			let payload = GrantPayload::refresh_token(&self.config, refresh_token.expose());

			common::post_token_request(self.http_client.as_ref(), &endpoint, &payload).await
		})
		.await
	}
}
