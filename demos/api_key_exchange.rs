//! Exchanges a Penneo API key and secret for an access token and persists the result to a JSON
//! file, so later runs can reuse it.
//!
//! ```sh
//! PENNEO_ENVIRONMENT=sandbox PENNEO_CLIENT_ID=... PENNEO_CLIENT_SECRET=... \
//! PENNEO_API_KEY=... PENNEO_API_SECRET=... cargo run --example api_key_exchange
//! ```

// std
use std::{env, sync::Arc};
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use penneo_oauth::{
	OAuthBuilder,
	store::{FileTokenStorage, TokenStorage},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let storage = Arc::new(FileTokenStorage::open(
		env::temp_dir().join("penneo-oauth-demo").join("tokens.json"),
	)?);
	let oauth = OAuthBuilder::new()
		.environment(env::var("PENNEO_ENVIRONMENT").unwrap_or_else(|_| "sandbox".into()))
		.client_id(required_var("PENNEO_CLIENT_ID")?)
		.client_secret(required_var("PENNEO_CLIENT_SECRET")?)
		.api_key(required_var("PENNEO_API_KEY")?)
		.api_secret(required_var("PENNEO_API_SECRET")?)
		.token_storage(storage.clone())
		.build()?;

	if let Some(previous) = storage.get_tokens().await? {
		println!("Replacing tokens that expire at {}.", previous.access_token_expires_at());
	}

	let tokens = oauth.exchange_api_key().await?;

	println!("Access token expires at {}.", tokens.access_token_expires_at());

	storage.set_tokens(tokens).await?;

	println!("Tokens saved to {}.", storage.path().display());

	Ok(())
}

fn required_var(name: &str) -> Result<String> {
	env::var(name).wrap_err_with(|| format!("{name} is not set"))
}
