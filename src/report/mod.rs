//! Report assembly and rendering.
//!
//! The report is the single structure handed to the outside world: the CLI
//! renders it as colored text or serializes it to JSON.

mod render;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::checks::{DkimResult, DmarcResult, Issue, MxResult, SpfResult};
use crate::score::{score_breakdown, ScoreBreakdown};

pub use render::{render_json, render_text};

/// Complete deliverability assessment of one domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliverabilityReport {
    /// The domain checked
    pub domain: String,
    /// When the report was assembled
    pub timestamp: DateTime<Utc>,
    /// Weighted score in `0..=100`
    pub health_score: u8,
    /// SPF check result
    pub spf: SpfResult,
    /// DKIM check result
    pub dkim: DkimResult,
    /// DMARC check result
    pub dmarc: DmarcResult,
    /// MX check result
    pub mx: MxResult,
    /// All issues, grouped spf, dkim, dmarc, mx
    pub issues: Vec<Issue>,
}

impl DeliverabilityReport {
    /// Points earned by each check.
    pub fn breakdown(&self) -> ScoreBreakdown {
        score_breakdown(&self.spf, &self.dkim, &self.dmarc, &self.mx)
    }

    /// Whether the score reaches `min_score`.
    pub fn passes(&self, min_score: u8) -> bool {
        self.health_score >= min_score
    }
}

/// Flattens the per-check issues in report order: spf, dkim, dmarc, mx.
pub fn collect_issues(
    spf: &SpfResult,
    dkim: &DkimResult,
    dmarc: &DmarcResult,
    mx: &MxResult,
) -> Vec<Issue> {
    [&spf.issues, &dkim.issues, &dmarc.issues, &mx.issues]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
}

/// Assembles the report, stamped with the current time.
pub fn assemble_report(
    domain: &str,
    spf: SpfResult,
    dkim: DkimResult,
    dmarc: DmarcResult,
    mx: MxResult,
) -> DeliverabilityReport {
    assemble_report_at(domain, Utc::now(), spf, dkim, dmarc, mx)
}

/// Assembles the report with an explicit timestamp.
pub fn assemble_report_at(
    domain: &str,
    timestamp: DateTime<Utc>,
    spf: SpfResult,
    dkim: DkimResult,
    dmarc: DmarcResult,
    mx: MxResult,
) -> DeliverabilityReport {
    let breakdown = score_breakdown(&spf, &dkim, &dmarc, &mx);
    let issues = collect_issues(&spf, &dkim, &dmarc, &mx);

    DeliverabilityReport {
        domain: domain.to_string(),
        timestamp,
        health_score: breakdown.health_score(),
        spf,
        dkim,
        dmarc,
        mx,
        issues,
    }
}
