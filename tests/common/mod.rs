#![allow(dead_code)]

// std
use std::{
	error::Error as StdError,
	future::Future,
	io,
	pin::Pin,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};
// crates.io
use httpmock::MockServer;
use time::{OffsetDateTime, macros};
// self
use penneo_oauth::{
	OAuth, OAuthBuilder, PenneoTokens,
	clock::Clock,
	http::{ReqwestHandle, ReqwestHttpClient, TokenHttpClient},
	nonce::NonceGenerator,
	oauth2::{AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse},
	reqwest,
	store::{MemoryTokenStorage, TokenStorage},
};

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const REDIRECT_URI: &str = "https://example.com/callback";
pub const API_KEY: &str = "api-key";
pub const API_SECRET: &str = "api-secret";
pub const NONCE: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
pub const NONCE_B64: &str = "AAECAwQFBgcICQoLDA0ODw==";
pub const CREATED_AT: &str = "Sat Oct 17 2026 09:30:00 GMT+0000";
pub const DIGEST: &str = "FU+7zCZM9bltglkXEj+MxkndfYM=";
pub const ACCESS_EXPIRES_AT: i64 = 1_792_231_200;
pub const REFRESH_EXPIRES_AT: i64 = 1_794_909_600;

/// Sends every token request to a local mock server, keeping the path and query.
#[derive(Clone, Debug)]
pub struct MockServerHttpClient {
	inner: ReqwestHttpClient,
	base_url: String,
}
impl MockServerHttpClient {
	pub fn new(base_url: impl Into<String>) -> Self {
		let inner =
			ReqwestHttpClient::without_redirects().expect("Test reqwest client should build.");

		Self { inner, base_url: base_url.into() }
	}
}
impl TokenHttpClient for MockServerHttpClient {
	type Handle = MockServerHandle;
	type TransportError = reqwest::Error;

	fn handle(&self) -> Self::Handle {
		MockServerHandle { inner: self.inner.handle(), base_url: self.base_url.clone() }
	}
}

pub struct MockServerHandle {
	inner: ReqwestHandle,
	base_url: String,
}
impl<'c> AsyncHttpClient<'c> for MockServerHandle {
	type Error = HttpClientError<reqwest::Error>;
	type Future = <ReqwestHandle as AsyncHttpClient<'c>>::Future;

	fn call(&'c self, mut request: HttpRequest) -> Self::Future {
		let path = request.uri().path_and_query().map(|value| value.as_str()).unwrap_or("/");
		let uri = format!("{}{path}", self.base_url);

		*request.uri_mut() = uri.parse().expect("Mock server URI should parse.");

		self.inner.call(request)
	}
}

/// Transport that fails every request before a response is received.
#[derive(Clone, Debug, Default)]
pub struct RefusingHttpClient {
	pub calls: Arc<AtomicUsize>,
}
impl RefusingHttpClient {
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl TokenHttpClient for RefusingHttpClient {
	type Handle = RefusingHandle;
	type TransportError = io::Error;

	fn handle(&self) -> Self::Handle {
		RefusingHandle { calls: self.calls.clone() }
	}
}

pub struct RefusingHandle {
	calls: Arc<AtomicUsize>,
}
impl<'c> AsyncHttpClient<'c> for RefusingHandle {
	type Error = HttpClientError<io::Error>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

	fn call(&'c self, _request: HttpRequest) -> Self::Future {
		self.calls.fetch_add(1, Ordering::SeqCst);

		Box::pin(async {
			Err(HttpClientError::Reqwest(Box::new(io::Error::new(
				io::ErrorKind::ConnectionRefused,
				"connection refused",
			))))
		})
	}
}

/// Nonce generator returning the same bytes every time.
#[derive(Clone, Copy, Debug)]
pub struct FixedNonce;
impl NonceGenerator for FixedNonce {
	fn generate(&self) -> Vec<u8> {
		NONCE.to_vec()
	}
}

/// Nonce generator returning a counter value, so consecutive calls differ.
#[derive(Debug, Default)]
pub struct CountingNonce(AtomicUsize);
impl NonceGenerator for CountingNonce {
	fn generate(&self) -> Vec<u8> {
		self.0.fetch_add(1, Ordering::SeqCst).to_be_bytes().to_vec()
	}
}

/// Clock frozen at 2026-10-17 09:30:00 UTC.
#[derive(Clone, Copy, Debug)]
pub struct FrozenClock;
impl Clock for FrozenClock {
	fn now(&self) -> OffsetDateTime {
		macros::datetime!(2026-10-17 09:30 UTC)
	}
}

pub fn base_builder(storage: Arc<dyn TokenStorage>) -> OAuthBuilder {
	OAuthBuilder::new()
		.environment("sandbox")
		.client_id(CLIENT_ID)
		.client_secret(CLIENT_SECRET)
		.redirect_uri(REDIRECT_URI)
		.token_storage(storage)
		.nonce_generator(Arc::new(FixedNonce))
		.clock(Arc::new(FrozenClock))
}

/// Builds a client whose requests reach `server` over plain HTTP.
pub fn mock_client(server: &MockServer, builder: OAuthBuilder) -> OAuth<MockServerHttpClient> {
	mock_client_at(format!("http://{}", server.address()), builder)
}

/// Builds a client whose requests are sent to `base_url`.
pub fn mock_client_at(base_url: impl Into<String>, builder: OAuthBuilder) -> OAuth<MockServerHttpClient> {
	builder
		.build_with_http_client(MockServerHttpClient::new(base_url))
		.expect("Test client should build.")
}

pub fn stored_tokens(refresh_token: Option<&str>) -> PenneoTokens {
	PenneoTokens::new(
		"stored-access",
		refresh_token.map(str::to_owned),
		macros::datetime!(2026-10-17 10:00 UTC),
		refresh_token.map(|_| macros::datetime!(2026-11-17 10:00 UTC)),
	)
}

pub fn seeded_storage(refresh_token: Option<&str>) -> Arc<MemoryTokenStorage> {
	Arc::new(MemoryTokenStorage::with_tokens(stored_tokens(refresh_token)))
}

pub fn token_body() -> String {
	format!(
		r#"{{"access_token":"access-new","refresh_token":"refresh-new","access_token_expires_at":{ACCESS_EXPIRES_AT},"refresh_token_expires_at":{REFRESH_EXPIRES_AT}}}"#
	)
}

pub fn source_chain(err: &dyn StdError) -> Vec<String> {
	let mut chain = Vec::new();
	let mut current = err.source();

	while let Some(source) = current {
		chain.push(source.to_string());
		current = source.source();
	}

	chain
}
