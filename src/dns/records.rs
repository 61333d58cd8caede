//! In-process DNS backend (TXT and MX) using `hickory-resolver`.
//!
//! Answers are formatted like `dig +short` output so that both backends feed
//! the checks the same lines:
//! - TXT: the character-strings of one record joined together
//! - MX: `"<preference> <exchange>"`

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::types::{LookupOutcome, RecordKind};
use super::DnsResolver;
use crate::error_handling::{QueryFailure, ResolverError};

impl From<RecordKind> for RecordType {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Txt => RecordType::TXT,
            RecordKind::Mx => RecordType::MX,
        }
    }
}

/// Resolver using the system DNS configuration, in process.
#[derive(Clone)]
pub struct SystemResolver {
    resolver: Arc<TokioAsyncResolver>,
    timeout: Duration,
}

impl std::fmt::Debug for SystemResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemResolver")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl SystemResolver {
    /// Creates a resolver from the system configuration with a per-query `timeout`.
    ///
    /// Falls back to the default upstream servers if the system configuration
    /// cannot be read.
    pub fn new(timeout: Duration) -> Self {
        let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                log::warn!("Could not read system DNS configuration, using defaults: {e}");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        opts.timeout = timeout;
        // No retries: a failed query degrades to "record absent"
        opts.attempts = 1;
        // Names are always fully qualified, never search-domain relative
        opts.ndots = 0;

        Self {
            resolver: Arc::new(TokioAsyncResolver::tokio(config, opts)),
            timeout,
        }
    }

    /// "No records" (including NXDomain) is an absent record; anything else a failure.
    fn classify_error(&self, e: &ResolveError) -> LookupOutcome {
        match e.kind() {
            ResolveErrorKind::NoRecordsFound { .. } => LookupOutcome::Absent,
            ResolveErrorKind::Timeout => LookupOutcome::Failed(QueryFailure::Timeout(self.timeout)),
            _ => LookupOutcome::Failed(QueryFailure::Resolve(e.to_string())),
        }
    }
}

impl DnsResolver for SystemResolver {
    async fn query(&self, name: &str, kind: RecordKind) -> Result<LookupOutcome, ResolverError> {
        let lookup = match tokio::time::timeout(
            self.timeout,
            self.resolver.lookup(name, RecordType::from(kind)),
        )
        .await
        {
            Err(_) => return Ok(LookupOutcome::Failed(QueryFailure::Timeout(self.timeout))),
            Ok(Err(e)) => return Ok(self.classify_error(&e)),
            Ok(Ok(lookup)) => lookup,
        };

        let answers: Vec<String> = lookup
            .iter()
            .filter_map(|rdata| match rdata {
                // TXT records can contain multiple strings - join them
                RData::TXT(txt) => Some(
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<String>>()
                        .join(""),
                ),
                RData::MX(mx) => Some(format!("{} {}", mx.preference(), mx.exchange().to_utf8())),
                _ => None,
            })
            .filter(|answer| !answer.trim().is_empty())
            .collect();

        Ok(LookupOutcome::from_answers(answers))
    }
}
