//! Authorization Code + PKCE: authorize URL construction and the code exchange.

mod pkce;

pub use pkce::{PkceCodeChallengeMethod, PkcePair};

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
	/// Builds the URL end users are sent to in order to approve the client.
	///
	/// Scopes are joined with spaces and omitted when empty. The challenge method is always
	/// `S256`, so `code_challenge` should come from [`PkcePair::challenge`].
	pub fn authorization_url<I, S>(
		&self,
		scopes: I,
		code_challenge: &str,
		state: Option<&str>,
	) -> Result<Url>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let config = self.config();
		let redirect_uri = config
			.redirect_uri()
			.ok_or(ConfigError::missing("redirect_uri", "OAuthBuilder::redirect_uri"))?;
		let scope = scopes.into_iter().fold(String::new(), |mut joined, scope| {
			if !joined.is_empty() {
				joined.push(' ');
			}

			joined.push_str(scope.as_ref());

			joined
		});
		let mut url = config.environment().authorization_endpoint();
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair("response_type", "code");
		pairs.append_pair("client_id", config.client_id());
		pairs.append_pair("redirect_uri", redirect_uri);

		if !scope.is_empty() {
			pairs.append_pair("scope", &scope);
		}

		pairs.append_pair("code_challenge", code_challenge);
		pairs.append_pair("code_challenge_method", PkceCodeChallengeMethod::S256.as_str());

		if let Some(state) = state {
			pairs.append_pair("state", state);
		}

		drop(pairs);

		Ok(url)
	}

	/// Exchanges an authorization code and its PKCE verifier for tokens.
	pub async fn exchange_authorization_code(
		&self,
		code: &str,
		code_verifier: &str,
	) -> Result<PenneoTokens> {
		obs::observe(FlowKind::AuthorizationCode, "exchange_authorization_code", async {
			let endpoint = self.config.environment().token_endpoint();
			let payload = GrantPayload::authorization_code(&self.config, code, code_verifier);

			common::post_token_request(self.http_client.as_ref(), &endpoint, &payload).await
		})
		.await
	}
}
