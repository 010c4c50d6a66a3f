//! Thread-safe in-memory [`TokenStorage`] for tests and short-lived processes.

// self
use crate::{
	_prelude::*,
	store::{StoreFuture, TokenStorage},
	tokens::PenneoTokens,
};

/// Keeps the current tokens in-process; clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStorage(Arc<RwLock<Option<PenneoTokens>>>);
impl MemoryTokenStorage {
	/// Creates a storage pre-seeded with `tokens`.
	pub fn with_tokens(tokens: PenneoTokens) -> Self {
		Self(Arc::new(RwLock::new(Some(tokens))))
	}
}
impl TokenStorage for MemoryTokenStorage {
	fn get_tokens(&self) -> StoreFuture<'_, Option<PenneoTokens>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(slot.read().clone()) })
	}

	fn set_tokens(&self, tokens: PenneoTokens) -> StoreFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move {
			*slot.write() = Some(tokens);

			Ok(())
		})
	}
}
