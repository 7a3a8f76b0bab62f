//! Storage layer for the expense tracker client
//!
//! The client keeps no local copy of expenses or categories; the only
//! durable state is the session file, written atomically.

pub mod file_io;
pub mod session;

pub use file_io::{read_json_optional, remove_if_exists, write_json_atomic};
pub use session::{is_well_formed_token, PersistedSession, SessionFile};
