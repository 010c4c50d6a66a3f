//! Token endpoint round trip shared by every grant.

// crates.io
use oauth2::{
	AsyncHttpClient, HttpResponse,
	http::{
		Method, Request,
		header::{ACCEPT, CONTENT_TYPE},
	},
};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
	http::TokenHttpClient,
	payload::GrantPayload,
	tokens::PenneoTokens,
};

const APPLICATION_JSON: &str = "application/json";

/// Error body returned with non-success statuses; every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
	#[serde(default)]
	error: Option<String>,
	#[serde(default)]
	error_description: Option<String>,
}

/// POSTs `payload` as JSON to `endpoint` and interprets the response.
pub(super) async fn post_token_request<C>(
	http_client: &C,
	endpoint: &Url,
	payload: &GrantPayload<'_>,
) -> Result<PenneoTokens>
where
	C: ?Sized + TokenHttpClient,
{
	let body = serde_json::to_vec(payload).map_err(ConfigError::RequestEncode)?;
	let request = Request::builder()
		.method(Method::POST)
		.uri(endpoint.as_str())
		.header(CONTENT_TYPE, APPLICATION_JSON)
		.header(ACCEPT, APPLICATION_JSON)
		.body(body)
		.map_err(ConfigError::from)?;
	let handle = http_client.handle();
	let response = handle.call(request).await.map_err(TransportError::from_http_client)?;

	parse_token_response(payload.action(), &response)
}

/// Maps a token endpoint response onto tokens or a structured failure.
///
/// Any 2xx status must carry a complete token body. Every other status is a failed exchange,
/// whose `error`/`error_description` are read leniently: a body that is not JSON or carries
/// unexpected types still yields [`Error::AuthExchangeFailed`].
pub(super) fn parse_token_response(
	action: &'static str,
	response: &HttpResponse,
) -> Result<PenneoTokens> {
	let status = response.status();

	if status.is_success() {
		let mut deserializer = serde_json::Deserializer::from_slice(response.body());

		return serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::MalformedResponse { status: status.as_u16(), source });
	}

	let ErrorBody { error, error_description } =
		serde_json::from_slice(response.body()).unwrap_or_default();

	Err(Error::AuthExchangeFailed {
		action,
		status: status.as_u16(),
		error,
		description: error_description,
	})
}
