//! Error types shared across the builder, exchange flows, transports, and token storage.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure; no response was received from the token endpoint.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Token endpoint rejected the exchange with a non-success status.
	#[error(
		"Failed to {action}: HTTP {status}, {}{}",
		.error.as_deref().unwrap_or("Unknown error"),
		.description.as_deref().map(|value| format!(" {value}")).unwrap_or_default()
	)]
	AuthExchangeFailed {
		/// Human-readable description of the attempted exchange.
		action: &'static str,
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// OAuth `error` code, when the response body carried one.
		error: Option<String>,
		/// OAuth `error_description`, when the response body carried one.
		description: Option<String>,
	},
	/// Token endpoint answered with success but the body is not a usable token response.
	#[error("Token endpoint returned a malformed response (HTTP {status}): {source}.")]
	MalformedResponse {
		/// HTTP status code of the response.
		status: u16,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A required builder parameter was never supplied.
	#[error("Cannot build: set the `{parameter}` parameter with `{setter}`.")]
	MissingParameter {
		/// Name of the missing parameter.
		parameter: &'static str,
		/// Setter that supplies the parameter.
		setter: &'static str,
	},
	/// Environment name does not match any supported deployment.
	#[error("Cannot build: unknown environment `{environment}`.")]
	UnsupportedEnvironment {
		/// Environment name that was supplied.
		environment: String,
	},
	/// Redirect URI is not a syntactically valid absolute URL.
	#[error("Cannot build: redirect URI `{uri}` is not a valid URL.")]
	InvalidRedirectUri {
		/// Redirect URI that was supplied.
		uri: String,
	},

	/// Token storage holds no refresh token to exchange.
	#[error("Token storage does not hold a refresh token.")]
	MissingRefreshToken,
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Grant payload could not be encoded as JSON.
	#[error("Grant payload could not be encoded.")]
	RequestEncode(#[source] serde_json::Error),
	/// `created_at` timestamp could not be formatted.
	#[error("Timestamp could not be formatted.")]
	TimestampFormat(#[from] time::error::Format),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Builds a [`ConfigError::MissingParameter`] for the named builder parameter.
	pub const fn missing(parameter: &'static str, setter: &'static str) -> Self {
		Self::MissingParameter { parameter, setter }
	}

	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (DNS, TCP, TLS, timeouts).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client failed before a response was received.
	#[error("Unexpected error occurred: {source}")]
	Network {
		/// Transport-specific failure.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Unwraps an [`oauth2::HttpClientError`] so the transport's own error becomes the source.
	pub fn from_http_client<E>(err: oauth2::HttpClientError<E>) -> Self
	where
		E: 'static + Send + Sync + std::error::Error,
	{
		let source: BoxError = match err {
			oauth2::HttpClientError::Reqwest(inner) => inner,
			oauth2::HttpClientError::Http(inner) => Box::new(inner),
			oauth2::HttpClientError::Io(inner) => Box::new(inner),
			oauth2::HttpClientError::Other(message) => message.into(),
			other => other.to_string().into(),
		};

		Self::Network { source }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
