//! Token storage contract and built-in storage backends.
//!
//! The exchange client only ever reads from storage (the refresh grant needs the current
//! refresh token). Persisting the tokens an exchange returns is left to the caller.

pub mod file;
pub mod memory;

pub use file::FileTokenStorage;
pub use memory::MemoryTokenStorage;

// self
use crate::{_prelude::*, tokens::PenneoTokens};

/// Boxed future returned by [`TokenStorage`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Persistence boundary for the current token pair.
pub trait TokenStorage
where
	Self: Send + Sync,
{
	/// Returns the stored tokens, if any have been saved.
	fn get_tokens(&self) -> StoreFuture<'_, Option<PenneoTokens>>;

	/// Replaces the stored tokens.
	fn set_tokens(&self, tokens: PenneoTokens) -> StoreFuture<'_, ()>;
}

/// Error type produced by [`TokenStorage`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
