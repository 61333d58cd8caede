//! DMARC record analysis.
//!
//! Finds the `v=DMARC1` record at `_dmarc.<domain>` and reads its tag list.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::Display;

use super::types::{CheckKind, Issue};
use crate::dns::{extract_dmarc_record, DnsResolver, RecordKind};
use crate::error_handling::ResolverError;

/// Requested handling of mail that fails DMARC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DmarcPolicy {
    /// Monitor only
    None,
    /// Deliver to spam
    Quarantine,
    /// Refuse delivery
    Reject,
}

impl FromStr for DmarcPolicy {
    type Err = String;

    /// Parses a `p=` value, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(DmarcPolicy::None),
            "quarantine" => Ok(DmarcPolicy::Quarantine),
            "reject" => Ok(DmarcPolicy::Reject),
            _ => Err(s.to_string()),
        }
    }
}

/// Outcome of the DMARC check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DmarcResult {
    /// A DMARC record was published
    pub valid: bool,
    /// The DMARC record text
    pub record: Option<String>,
    /// Policy from the `p` tag (`none` when the tag is absent)
    pub policy: Option<DmarcPolicy>,
    /// Aggregate or forensic reports are requested
    pub reporting: bool,
    /// Aggregate report destination(s)
    pub rua: Option<String>,
    /// Forensic report destination(s)
    pub ruf: Option<String>,
    /// Every parsed tag, by name
    pub tags: BTreeMap<String, String>,
    /// Findings, in the order they were raised
    pub issues: Vec<Issue>,
}

/// Parses a DMARC tag list into a map.
///
/// Segments are separated by `;`. Segments without `=` are ignored; the rest
/// are split on the first `=`, with key and value trimmed. A repeated tag
/// keeps its last value.
pub fn parse_tags(record: &str) -> BTreeMap<String, String> {
    record
        .split(';')
        .map(str::trim)
        .filter_map(|segment| segment.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Analyzes the TXT answers of `_dmarc.<domain>`.
pub fn analyze_dmarc(answers: &[String]) -> DmarcResult {
    let Some(record) = extract_dmarc_record(answers) else {
        return DmarcResult {
            valid: false,
            record: None,
            policy: None,
            reporting: false,
            rua: None,
            ruf: None,
            tags: BTreeMap::new(),
            issues: vec![Issue::high(CheckKind::Dmarc, "No DMARC record found")],
        };
    };

    let tags = parse_tags(record);
    let mut issues = Vec::new();

    let policy = match tags.get("p") {
        None => Some(DmarcPolicy::None),
        Some(value) => match value.parse::<DmarcPolicy>() {
            Ok(policy) => Some(policy),
            Err(unknown) => {
                issues.push(Issue::medium(
                    CheckKind::Dmarc,
                    format!("Unrecognized DMARC policy: '{unknown}'"),
                ));
                None
            }
        },
    };

    let report_tag = |name: &str| tags.get(name).filter(|v| !v.is_empty()).cloned();
    let rua = report_tag("rua");
    let ruf = report_tag("ruf");
    let reporting = rua.is_some() || ruf.is_some();

    log::debug!("DMARC record: {record}");
    log::debug!(
        "DMARC policy: {}, rua: {}, ruf: {}",
        policy.map_or_else(|| "unrecognized".to_string(), |p| p.to_string()),
        rua.as_deref().unwrap_or("-"),
        ruf.as_deref().unwrap_or("-")
    );

    if policy == Some(DmarcPolicy::None) {
        issues.push(Issue::medium(
            CheckKind::Dmarc,
            "DMARC policy is 'none' - no enforcement",
        ));
    }
    if !reporting {
        issues.push(Issue::medium(
            CheckKind::Dmarc,
            "No DMARC reporting configured (rua/ruf)",
        ));
    }

    DmarcResult {
        valid: true,
        record: Some(record.to_string()),
        policy,
        reporting,
        rua,
        ruf,
        tags,
        issues,
    }
}

/// Queries `_dmarc.<domain>` and analyzes its DMARC policy.
///
/// # Errors
///
/// Returns `ResolverError` only if the resolver cannot run at all.
pub async fn check_dmarc<R: DnsResolver>(
    resolver: &R,
    domain: &str,
) -> Result<DmarcResult, ResolverError> {
    let name = format!("_dmarc.{domain}");
    let answers = resolver
        .query(&name, RecordKind::Txt)
        .await?
        .into_answers(&name, RecordKind::Txt);
    Ok(analyze_dmarc(&answers))
}
