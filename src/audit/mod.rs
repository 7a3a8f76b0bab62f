//! Audit trail for the expense tracker client
//!
//! Records logins, logouts and every create, update and delete the client
//! performs, in an append-only JSONL file.
//!
//! - `AuditEntry`: timestamp, operation, entity and an optional detail
//! - `AuditLogger`: appends entries to and reads them back from the log
//! - `summarize_changes`: one-line field diff for update entries

mod diff;
mod entry;
mod logger;

pub use diff::summarize_changes;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
