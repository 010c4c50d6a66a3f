//! Nonce generation for replay protection in the `api_keys` grant.

// crates.io
use rand::Rng;

/// Length, in bytes, of nonces produced by [`RandomBytesNonceGenerator`].
pub const NONCE_LEN: usize = 32;

/// Source of single-use random byte strings.
///
/// The same bytes feed both the transmitted (base64) nonce and the digest, so implementations
/// must return a fresh value on every call and retain no state between calls.
pub trait NonceGenerator
where
	Self: Send + Sync,
{
	/// Returns a new random byte string.
	fn generate(&self) -> Vec<u8>;
}

/// Default generator drawing [`NONCE_LEN`] bytes from the thread-local CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBytesNonceGenerator;
impl NonceGenerator for RandomBytesNonceGenerator {
	fn generate(&self) -> Vec<u8> {
		let mut bytes = [0_u8; NONCE_LEN];

		rand::rng().fill(&mut bytes);

		bytes.to_vec()
	}
}
