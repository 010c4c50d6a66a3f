//! Optional observability for token exchanges.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap each exchange in a span named `penneo_oauth.exchange` carrying the
//!   `flow` (grant) and `stage` (call site) fields, and to log failed exchanges at `WARN`.
//! - Enable `metrics` to increment the `penneo_oauth_exchange_total` counter for every
//!   attempt/success/failure, labeled by `flow` + `outcome`, and
//!   `penneo_oauth_exchange_failures_total` labeled by `flow` + `reason`.
//!
//! Without either feature every helper compiles down to a passthrough.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Token exchanges observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Authorization code exchange.
	AuthorizationCode,
	/// Refresh token exchange.
	RefreshToken,
	/// Signed API key exchange.
	ApiKeys,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::AuthorizationCode => "authorization_code",
			FlowKind::RefreshToken => "refresh_token",
			FlowKind::ApiKeys => "api_keys",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Exchange started.
	Attempt,
	/// Exchange returned tokens.
	Success,
	/// Exchange returned an error to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside a flow span and records its attempt and final outcome.
pub async fn observe<T, Fut>(kind: FlowKind, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = FlowSpan::new(kind, stage);

	record_flow_outcome(kind, FlowOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_flow_outcome(kind, FlowOutcome::Success),
		Err(err) => {
			span.record_failure(err);
			record_flow_outcome(kind, FlowOutcome::Failure);
			record_flow_failure(kind, err);
		},
	}

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::ConfigError;

	#[tokio::test]
	async fn observe_passes_results_through() {
		let value = observe(FlowKind::ApiKeys, "observe_ok", async { Ok(42) }).await;

		assert_eq!(value.ok(), Some(42));

		let err = observe::<(), _>(FlowKind::RefreshToken, "observe_err", async {
			Err(ConfigError::MissingRefreshToken.into())
		})
		.await
		.expect_err("Failures should reach the caller unchanged.");

		assert!(matches!(err, Error::Config(ConfigError::MissingRefreshToken)));
	}
}
