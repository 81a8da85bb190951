//! Builtin reference data: which municipalities each regional command
//! owns, plus the display-alias table for the geographic dataset's
//! alternate spellings.

pub mod aliases;
pub mod error;
pub mod integrity;
pub mod loader;

pub use aliases::{DISPLAY_ALIASES, resolve_display_alias};
pub use error::{RegionsError, Result};
pub use integrity::{IntegrityIssue, validate, validate_and_log};
pub use loader::{load_builtin, parse_members_csv};
