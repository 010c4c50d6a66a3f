//! Signed `api_keys` grant.

// self
use crate::{
	_prelude::*,
	clock,
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
	/// Exchanges the configured API key and secret for tokens.
	///
	/// Every call draws a fresh nonce and signs it together with the current `created_at`
	/// timestamp; the secret itself never leaves the process.
	pub async fn exchange_api_key(&self) -> Result<PenneoTokens> {
		obs::observe(FlowKind::ApiKeys, "exchange_api_key", async {
			let nonce = self.nonce_generator.generate();
			let created_at = clock::format_created_at(self.clock.now())?;
			let payload = GrantPayload::api_keys(&self.config, &nonce, created_at)?;
			let endpoint = self.config.environment().token_endpoint();

			common::post_token_request(self.http_client.as_ref(), &endpoint, &payload).await
		})
		.await
	}
}
