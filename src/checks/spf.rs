//! SPF record analysis.
//!
//! Finds the `v=spf1` record among the apex TXT answers, reads its trailing
//! `all` qualifier, and approximates the number of DNS lookups it triggers.

use serde::Serialize;
use strum_macros::Display;

use super::types::{CheckKind, Issue};
use crate::config::SPF_MAX_LOOKUPS;
use crate::dns::{extract_spf_record, DnsResolver, RecordKind};
use crate::error_handling::ResolverError;

/// Mechanisms and modifiers that cost one DNS lookup each.
const LOOKUP_TERMS: &[&str] = &["include:", "a:", "mx:", "redirect="];

/// Strength of the policy's failure handling, from the trailing `all` term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SpfEnforcement {
    /// No recognized `all` qualifier at the end of the record
    #[default]
    None,
    /// `-all`
    HardFail,
    /// `~all`
    SoftFail,
    /// `?all`
    Neutral,
    /// `+all`, which authorizes every sender
    PassAll,
}

impl SpfEnforcement {
    /// Levels that leave spoofed mail effectively unchecked.
    pub fn is_weak(self) -> bool {
        matches!(self, SpfEnforcement::Neutral | SpfEnforcement::PassAll)
    }
}

/// Outcome of the SPF check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpfResult {
    /// An SPF record was published
    pub valid: bool,
    /// The SPF record text
    pub record: Option<String>,
    /// Failure handling strength
    pub enforcement: SpfEnforcement,
    /// Approximate DNS lookups needed to evaluate the record
    pub lookup_count: u32,
    /// Findings, in the order they were raised
    pub issues: Vec<Issue>,
}

/// Reads the enforcement level from the record's trailing `all` term.
pub fn enforcement_level(record: &str) -> SpfEnforcement {
    if record.ends_with("-all") {
        SpfEnforcement::HardFail
    } else if record.ends_with("~all") {
        SpfEnforcement::SoftFail
    } else if record.ends_with("?all") {
        SpfEnforcement::Neutral
    } else if record.ends_with("+all") {
        SpfEnforcement::PassAll
    } else {
        SpfEnforcement::None
    }
}

/// Approximates the number of DNS lookups the record triggers.
///
/// Counts every `include:`, `a:`, `mx:` and `redirect=` occurrence, plus one
/// each for a bare `a` or `mx` term (which look up the domain itself).
pub fn count_lookups(record: &str) -> u32 {
    let mut count = LOOKUP_TERMS
        .iter()
        .map(|term| record.matches(term).count() as u32)
        .sum::<u32>();

    let padded = format!(" {record} ");
    if padded.contains(" a ") || record.starts_with("a ") {
        count += 1;
    }
    if padded.contains(" mx ") || record.starts_with("mx ") {
        count += 1;
    }
    count
}

/// Analyzes the TXT answers of the apex domain.
pub fn analyze_spf(answers: &[String]) -> SpfResult {
    let Some(record) = extract_spf_record(answers) else {
        return SpfResult {
            valid: false,
            record: None,
            enforcement: SpfEnforcement::None,
            lookup_count: 0,
            issues: vec![Issue::high(CheckKind::Spf, "No SPF record found")],
        };
    };

    let enforcement = enforcement_level(record);
    let lookup_count = count_lookups(record);
    log::debug!("SPF record: {record}");
    log::debug!("SPF enforcement: {enforcement}, DNS lookups: {lookup_count}");

    let mut issues = Vec::new();
    if lookup_count > SPF_MAX_LOOKUPS {
        issues.push(Issue::medium(
            CheckKind::Spf,
            format!("SPF lookup count ({lookup_count}) exceeds limit of {SPF_MAX_LOOKUPS}"),
        ));
    }
    if enforcement.is_weak() {
        issues.push(Issue::medium(
            CheckKind::Spf,
            format!("Weak enforcement level: {enforcement}"),
        ));
    }

    SpfResult {
        valid: true,
        record: Some(record.to_string()),
        enforcement,
        lookup_count,
        issues,
    }
}

/// Queries the apex TXT records of `domain` and analyzes its SPF policy.
///
/// # Errors
///
/// Returns `ResolverError` only if the resolver cannot run at all.
pub async fn check_spf<R: DnsResolver>(
    resolver: &R,
    domain: &str,
) -> Result<SpfResult, ResolverError> {
    let answers = resolver
        .query(domain, RecordKind::Txt)
        .await?
        .into_answers(domain, RecordKind::Txt);
    Ok(analyze_spf(&answers))
}
