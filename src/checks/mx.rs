//! MX record analysis.

use serde::Serialize;

use super::types::{CheckKind, Issue};
use crate::config::ProviderPattern;
use crate::dns::{DnsResolver, RecordKind};
use crate::error_handling::ResolverError;

/// One mail exchanger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxRecord {
    /// Preference; lower is tried first
    pub priority: u16,
    /// Exchanger hostname, without the trailing dot
    pub host: String,
}

/// Outcome of the MX check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxResult {
    /// The MX query returned answers
    pub valid: bool,
    /// Parsed records, ascending by priority
    pub records: Vec<MxRecord>,
    /// Mail provider identified from the hostnames
    pub provider: Option<String>,
    /// Findings, in the order they were raised
    pub issues: Vec<Issue>,
}

/// Parses a `"<priority> <host>"` answer line.
///
/// Returns `None` for lines with fewer than two fields or a non-numeric priority.
pub fn parse_mx_line(line: &str) -> Option<MxRecord> {
    let mut parts = line.split_whitespace();
    let (priority, host) = (parts.next()?, parts.next()?);
    let priority = priority.parse::<u16>().ok()?;
    Some(MxRecord {
        priority,
        host: host.trim_end_matches('.').to_string(),
    })
}

/// Identifies the mail provider from the first record whose host contains a
/// known pattern. Records are scanned in the order given, patterns in table order.
pub fn detect_provider(records: &[MxRecord], providers: &[ProviderPattern]) -> Option<String> {
    records.iter().find_map(|record| {
        providers
            .iter()
            .find(|p| record.host.contains(p.pattern.as_str()))
            .map(|p| p.provider.clone())
    })
}

/// Analyzes the MX answers of the apex domain.
pub fn analyze_mx(answers: &[String], providers: &[ProviderPattern]) -> MxResult {
    if answers.is_empty() {
        return MxResult {
            valid: false,
            records: Vec::new(),
            provider: None,
            issues: vec![Issue::high(CheckKind::Mx, "No MX records found")],
        };
    }

    let mut records: Vec<MxRecord> = answers
        .iter()
        .filter_map(|line| {
            let record = parse_mx_line(line);
            if record.is_none() {
                log::debug!("Skipping malformed MX answer: {line:?}");
            }
            record
        })
        .collect();

    // Provider detection runs in resolver order
    let provider = detect_provider(&records, providers);
    records.sort_by_key(|record| record.priority);

    for record in &records {
        log::debug!("MX priority {}: {}", record.priority, record.host);
    }
    if let Some(provider) = &provider {
        log::debug!("Detected mail provider: {provider}");
    }

    let mut issues = Vec::new();
    if records.len() == 1 {
        issues.push(Issue::medium(
            CheckKind::Mx,
            "Only one MX record - consider adding backup",
        ));
    }

    MxResult {
        valid: true,
        records,
        provider,
        issues,
    }
}

/// Queries the apex MX records of `domain` and analyzes them.
///
/// # Errors
///
/// Returns `ResolverError` only if the resolver cannot run at all.
pub async fn check_mx<R: DnsResolver>(
    resolver: &R,
    domain: &str,
    providers: &[ProviderPattern],
) -> Result<MxResult, ResolverError> {
    let answers = resolver
        .query(domain, RecordKind::Mx)
        .await?
        .into_answers(domain, RecordKind::Mx);
    Ok(analyze_mx(&answers, providers))
}
