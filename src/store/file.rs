//! JSON file-backed [`TokenStorage`] that keeps tokens across process restarts.

// std
use std::{
	fs::{self, File},
	io::{self, ErrorKind, Write},
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	store::{StoreError, StoreFuture, TokenStorage},
	tokens::PenneoTokens,
};

/// Persists the current tokens to a JSON file after each write.
///
/// Writes land in a sibling `.tmp` file that is synced and then renamed over the target, so a
/// crash never leaves a truncated snapshot behind. A missing or empty file reads as "no tokens".
#[derive(Clone, Debug)]
pub struct FileTokenStorage {
	path: PathBuf,
	current: Arc<RwLock<Option<PenneoTokens>>>,
}
impl FileTokenStorage {
	/// Opens the storage at `path`, creating parent directories and loading any saved tokens.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		create_parent_dir(&path)?;

		let current = read_snapshot(&path)?;

		Ok(Self { path, current: Arc::new(RwLock::new(current)) })
	}

	/// Location of the backing file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn write_snapshot(&self, tokens: &PenneoTokens) -> Result<(), StoreError> {
		let json = serde_json::to_vec_pretty(tokens).map_err(|e| StoreError::Serialization {
			message: format!("Failed to serialize tokens: {e}"),
		})?;
		let tmp_path = self.path.with_extension("tmp");

		create_parent_dir(&self.path)?;

		let mut file = File::create(&tmp_path).map_err(backend("create", &tmp_path))?;

		file.write_all(&json).map_err(backend("write", &tmp_path))?;
		file.sync_all().map_err(backend("sync", &tmp_path))?;
		drop(file);

		fs::rename(&tmp_path, &self.path).map_err(backend("replace", &self.path))
	}
}
impl TokenStorage for FileTokenStorage {
	fn get_tokens(&self) -> StoreFuture<'_, Option<PenneoTokens>> {
		Box::pin(async move { Ok(self.current.read().clone()) })
	}

	fn set_tokens(&self, tokens: PenneoTokens) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut current = self.current.write();

			self.write_snapshot(&tokens)?;
			*current = Some(tokens);

			Ok(())
		})
	}
}

fn read_snapshot(path: &Path) -> Result<Option<PenneoTokens>, StoreError> {
	let bytes = match fs::read(path) {
		Ok(bytes) => bytes,
		Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
		Err(e) => return Err(backend("read", path)(e)),
	};

	if bytes.iter().all(u8::is_ascii_whitespace) {
		return Ok(None);
	}

	serde_json::from_slice(&bytes).map(Some).map_err(|e| StoreError::Serialization {
		message: format!("Failed to parse {}: {e}", path.display()),
	})
}

fn create_parent_dir(path: &Path) -> Result<(), StoreError> {
	match path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		Some(parent) => fs::create_dir_all(parent).map_err(backend("create directory", parent)),
		None => Ok(()),
	}
}

fn backend<'a>(action: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> StoreError + 'a {
	move |e| StoreError::Backend { message: format!("Failed to {action} {}: {e}", path.display()) }
}
