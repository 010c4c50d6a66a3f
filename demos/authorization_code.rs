//! Walks through the Authorization Code + PKCE flow: prints the URL to approve the client, reads
//! the returned `code` from stdin, exchanges it, and then refreshes the resulting tokens once.
//!
//! ```sh
//! PENNEO_CLIENT_ID=... PENNEO_CLIENT_SECRET=... PENNEO_REDIRECT_URI=https://... \
//! cargo run --example authorization_code
//! ```

// std
use std::{
	env,
	io::{self, BufRead},
	sync::Arc,
};
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use penneo_oauth::{
	Environment, OAuthBuilder,
	flows::PkcePair,
	store::{MemoryTokenStorage, TokenStorage},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let storage = Arc::new(MemoryTokenStorage::default());
	let oauth = OAuthBuilder::new()
		.environment(Environment::Sandbox)
		.client_id(required_var("PENNEO_CLIENT_ID")?)
		.client_secret(required_var("PENNEO_CLIENT_SECRET")?)
		.redirect_uri(required_var("PENNEO_REDIRECT_URI")?)
		.token_storage(storage.clone())
		.build()?;
	let pkce = PkcePair::generate();
	let url = oauth.authorization_url(["full_access"], pkce.challenge(), Some("demo-state"))?;

	println!("Open this URL, approve the client, then paste the `code` query parameter:\n{url}");

	let mut code = String::new();

	io::stdin().lock().read_line(&mut code)?;

	let tokens = oauth.exchange_authorization_code(code.trim(), pkce.verifier()).await?;

	println!("Access token expires at {}.", tokens.access_token_expires_at());

	storage.set_tokens(tokens).await?;

	let refreshed = oauth.refresh_tokens().await?;

	println!("Refreshed access token expires at {}.", refreshed.access_token_expires_at());

	storage.set_tokens(refreshed).await?;

	Ok(())
}

fn required_var(name: &str) -> Result<String> {
	env::var(name).wrap_err_with(|| format!("{name} is not set"))
}
