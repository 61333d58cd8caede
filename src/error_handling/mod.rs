//! Error handling.
//!
//! Errors are split by how far they propagate:
//! - **Fatal**: [`ResolverError`] aborts the whole run before a report exists
//! - **Soft**: [`QueryFailure`] degrades a single lookup to "record absent"
//! - **Input**: [`DomainError`] rejects a domain before any lookup
//! - **Setup**: [`InitializationError`] for logger initialization
//!
//! Validation findings are not errors at all; they are `Issue`s in the report.

mod types;

// Re-export public API
pub use types::{DomainError, InitializationError, QueryFailure, ResolverError};
