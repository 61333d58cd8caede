//! DNS resolution gateway.
//!
//! This module provides the single capability every check depends on: one
//! query of one record type for one name, returning cleaned answer lines.
//!
//! Backends:
//! - [`DigResolver`]: shells out to `dig +short` (default)
//! - [`SystemResolver`]: in-process lookups via `hickory-resolver`
//! - [`StaticResolver`]: canned answers, for offline runs and tests
//!
//! A missing `dig` executable is the only fatal error. Timeouts and resolver
//! errors come back as [`LookupOutcome::Failed`] and are treated by the checks
//! exactly like an absent record.

use std::future::Future;

mod dig;
mod extract;
mod fixture;
mod records;
mod types;

use crate::error_handling::ResolverError;

// Re-export public API
pub use dig::DigResolver;
pub use extract::{
    clean_output, extract_dmarc_record, extract_spf_record, find_record, DMARC_PREFIX, SPF_PREFIX,
};
pub use fixture::StaticResolver;
pub use records::SystemResolver;
pub use types::{LookupOutcome, RecordKind};

/// A source of DNS answers.
pub trait DnsResolver: Send + Sync {
    /// Issues one query of `kind` for `name`.
    ///
    /// # Errors
    ///
    /// Returns `ResolverError::ToolMissing` if the resolver cannot run at all.
    /// Per-query failures are reported in the `Ok` value.
    fn query(
        &self,
        name: &str,
        kind: RecordKind,
    ) -> impl Future<Output = Result<LookupOutcome, ResolverError>> + Send;
}

/// Backend selected at runtime from the configuration.
#[derive(Debug, Clone)]
pub enum Resolver {
    /// `dig` subprocess backend
    Dig(DigResolver),
    /// In-process backend
    System(SystemResolver),
}

impl DnsResolver for Resolver {
    async fn query(&self, name: &str, kind: RecordKind) -> Result<LookupOutcome, ResolverError> {
        match self {
            Resolver::Dig(resolver) => resolver.query(name, kind).await,
            Resolver::System(resolver) => resolver.query(name, kind).await,
        }
    }
}
