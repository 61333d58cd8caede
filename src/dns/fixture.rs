//! Canned-answer backend.
//!
//! Serves fixed answers without touching the network, for offline runs and
//! tests. Names are matched case-insensitively.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use super::types::{LookupOutcome, RecordKind};
use super::DnsResolver;
use crate::error_handling::{QueryFailure, ResolverError};

/// Resolver answering from an in-memory table.
///
/// ```
/// use deliverability_check::dns::{DnsResolver, LookupOutcome, RecordKind, StaticResolver};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let resolver = StaticResolver::new().with_txt("example.com", &["v=spf1 -all"]);
/// let outcome = resolver.query("example.com", RecordKind::Txt).await.unwrap();
/// assert_eq!(outcome, LookupOutcome::Answers(vec!["v=spf1 -all".to_string()]));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    answers: HashMap<(String, RecordKind), Vec<String>>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    tool_missing: bool,
}

impl StaticResolver {
    /// Creates a resolver with no records at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds TXT answer lines for `name`.
    pub fn with_txt(self, name: &str, lines: &[&str]) -> Self {
        self.with_answers(name, RecordKind::Txt, lines)
    }

    /// Adds MX answer lines (`"<priority> <host>"`) for `name`.
    pub fn with_mx(self, name: &str, lines: &[&str]) -> Self {
        self.with_answers(name, RecordKind::Mx, lines)
    }

    /// Adds answer lines of any kind for `name`, after any already present.
    pub fn with_answers(mut self, name: &str, kind: RecordKind, lines: &[&str]) -> Self {
        self.answers
            .entry((name.to_lowercase(), kind))
            .or_default()
            .extend(lines.iter().map(|line| line.to_string()));
        self
    }

    /// Makes every query for `name` fail as if it had timed out.
    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_lowercase());
        self
    }

    /// Delays every answer for `name`.
    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_lowercase(), delay);
        self
    }

    /// Makes every query report a missing resolution tool.
    pub fn with_tool_missing(mut self) -> Self {
        self.tool_missing = true;
        self
    }
}

impl DnsResolver for StaticResolver {
    async fn query(&self, name: &str, kind: RecordKind) -> Result<LookupOutcome, ResolverError> {
        if self.tool_missing {
            return Err(ResolverError::ToolMissing {
                tool: "static".to_string(),
            });
        }

        let name = name.to_lowercase();
        if let Some(delay) = self.delays.get(&name) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(&name) {
            return Ok(LookupOutcome::Failed(QueryFailure::Timeout(
                Duration::from_secs(crate::config::DNS_TIMEOUT_SECS),
            )));
        }

        let answers = self.answers.get(&(name, kind)).cloned().unwrap_or_default();
        Ok(LookupOutcome::from_answers(answers))
    }
}
