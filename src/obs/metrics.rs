// self
use crate::{
	_prelude::*,
	obs::{FlowKind, FlowOutcome},
};

/// Counts exchanges per flow and outcome as `penneo_oauth_exchange_total`.
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"penneo_oauth_exchange_total",
		"flow" => kind.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}

/// Counts failed exchanges per flow and failure reason as `penneo_oauth_exchange_failures_total`.
pub fn record_flow_failure(kind: FlowKind, err: &Error) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"penneo_oauth_exchange_failures_total",
		"flow" => kind.as_str(),
		"reason" => failure_reason(err)
	)
	.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (kind, err);
}

/// Low-cardinality label describing why an exchange failed.
pub fn failure_reason(err: &Error) -> &'static str {
	match err {
		Error::Storage(_) => "storage",
		Error::Config(_) => "config",
		Error::Transport(_) => "transport",
		Error::AuthExchangeFailed { .. } => "rejected",
		Error::MalformedResponse { .. } => "malformed_response",
	}
}
