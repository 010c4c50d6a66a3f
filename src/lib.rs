//! OAuth token exchange core for the Penneo signing platform: turn an authorization code, a stored
//! refresh token, or a signed API key/secret pair into fresh access tokens.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod builder;
pub mod clock;
pub mod config;
pub mod error;
pub mod flows;
pub mod http;
pub mod nonce;
pub mod obs;
pub mod payload;
pub mod store;
pub mod tokens;

pub use builder::OAuthBuilder;
pub use config::{Environment, OAuthConfig};
pub use error::{Error, Result};
pub use flows::OAuth;
pub use tokens::PenneoTokens;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
