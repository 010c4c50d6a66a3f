//! Immutable token snapshot returned by every successful exchange.

pub mod secret;

pub use secret::TokenSecret;

// self
use crate::_prelude::*;

/// Errors produced by [`PenneoTokensBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum PenneoTokensBuilderError {
	/// Issued when no access token value was provided.
	#[error("Access token is required.")]
	MissingAccessToken,
	/// Issued when no access token expiry was provided.
	#[error("Access token expiry is required.")]
	MissingAccessTokenExpiry,
}

/// Access token, optional refresh token, and their expiry instants.
///
/// The wire and storage shape is identical: expiries travel as unix timestamps in seconds and
/// the refresh pair may be absent. A new value replaces the old one in storage; instances are
/// never mutated.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenneoTokens {
	access_token: TokenSecret,
	#[serde(default)]
	refresh_token: Option<TokenSecret>,
	#[serde(with = "time::serde::timestamp")]
	access_token_expires_at: OffsetDateTime,
	#[serde(default, with = "time::serde::timestamp::option")]
	refresh_token_expires_at: Option<OffsetDateTime>,
}
impl PenneoTokens {
	/// Creates a token snapshot from its parts.
	pub fn new(
		access_token: impl Into<String>,
		refresh_token: Option<String>,
		access_token_expires_at: OffsetDateTime,
		refresh_token_expires_at: Option<OffsetDateTime>,
	) -> Self {
		Self {
			access_token: TokenSecret::new(access_token),
			refresh_token: refresh_token.map(TokenSecret::new),
			access_token_expires_at,
			refresh_token_expires_at,
		}
	}

	/// Returns a builder for assembling a snapshot field by field.
	pub fn builder() -> PenneoTokensBuilder {
		PenneoTokensBuilder::default()
	}

	/// Access token secret used to authenticate API calls.
	pub fn access_token(&self) -> &TokenSecret {
		&self.access_token
	}

	/// Refresh token secret, when the grant issued one.
	pub fn refresh_token(&self) -> Option<&TokenSecret> {
		self.refresh_token.as_ref()
	}

	/// Instant after which the access token is no longer accepted.
	pub fn access_token_expires_at(&self) -> OffsetDateTime {
		self.access_token_expires_at
	}

	/// Instant after which the refresh token is no longer accepted.
	pub fn refresh_token_expires_at(&self) -> Option<OffsetDateTime> {
		self.refresh_token_expires_at
	}
}
impl Debug for PenneoTokens {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("PenneoTokens")
			.field("access_token", &self.access_token)
			.field("refresh_token", &self.refresh_token)
			.field("access_token_expires_at", &self.access_token_expires_at)
			.field("refresh_token_expires_at", &self.refresh_token_expires_at)
			.finish()
	}
}

/// Builder for [`PenneoTokens`].
#[derive(Clone, Debug, Default)]
pub struct PenneoTokensBuilder {
	access_token: Option<TokenSecret>,
	refresh_token: Option<TokenSecret>,
	access_token_expires_at: Option<OffsetDateTime>,
	refresh_token_expires_at: Option<OffsetDateTime>,
}
impl PenneoTokensBuilder {
	/// Provides the access token value.
	pub fn access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(TokenSecret::new(token));

		self
	}

	/// Provides the refresh token value.
	pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
		self.refresh_token = Some(TokenSecret::new(token));

		self
	}

	/// Sets the access token expiry instant.
	pub fn access_token_expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.access_token_expires_at = Some(instant);

		self
	}

	/// Sets the refresh token expiry instant.
	pub fn refresh_token_expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.refresh_token_expires_at = Some(instant);

		self
	}

	/// Consumes the builder and produces a [`PenneoTokens`].
	pub fn build(self) -> Result<PenneoTokens, PenneoTokensBuilderError> {
		let access_token = self.access_token.ok_or(PenneoTokensBuilderError::MissingAccessToken)?;
		let access_token_expires_at = self
			.access_token_expires_at
			.ok_or(PenneoTokensBuilderError::MissingAccessTokenExpiry)?;

		Ok(PenneoTokens {
			access_token,
			refresh_token: self.refresh_token,
			access_token_expires_at,
			refresh_token_expires_at: self.refresh_token_expires_at,
		})
	}
}
