//! Wall-clock access for signed `created_at` timestamps.

// crates.io
use time::{format_description::BorrowedFormatItem, macros::format_description};
// self
use crate::{_prelude::*, error::ConfigError};

const CREATED_AT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
	"[weekday repr:short] [month repr:short] [day] [year] [hour]:[minute]:[second] GMT[offset_hour sign:mandatory][offset_minute]"
);

/// Current-time accessor injected into the API-key exchange.
pub trait Clock
where
	Self: Send + Sync,
{
	/// Returns the current instant.
	fn now(&self) -> OffsetDateTime;
}

/// Default clock reading the system time in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;
impl Clock for SystemClock {
	fn now(&self) -> OffsetDateTime {
		OffsetDateTime::now_utc()
	}
}

/// Formats an instant as the `created_at` string signed by the API-key digest,
/// e.g. `Sat Oct 17 2026 09:30:00 GMT+0000`.
pub fn format_created_at(instant: OffsetDateTime) -> Result<String, ConfigError> {
	Ok(instant.format(CREATED_AT_FORMAT)?)
}
