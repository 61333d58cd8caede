//! Issue types shared by all checks.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// How urgently an issue should be fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A record is missing entirely
    High,
    /// A record exists but is weak or incomplete
    Medium,
    /// Working, with room for redundancy
    Low,
}

/// The check an issue belongs to, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Sender Policy Framework
    Spf,
    /// DomainKeys Identified Mail
    Dkim,
    /// Domain-based Message Authentication, Reporting and Conformance
    Dmarc,
    /// Mail exchangers
    Mx,
}

/// A single finding, tagged with its severity where it is raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// How urgent the finding is
    pub severity: Severity,
    /// Which check raised it
    pub check: CheckKind,
    /// Human-readable description
    pub message: String,
}

impl Issue {
    /// Creates an issue.
    pub fn new(severity: Severity, check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            check,
            message: message.into(),
        }
    }

    /// A high-severity issue (missing record).
    pub fn high(check: CheckKind, message: impl Into<String>) -> Self {
        Self::new(Severity::High, check, message)
    }

    /// A medium-severity issue.
    pub fn medium(check: CheckKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Medium, check, message)
    }

    /// A low-severity issue.
    pub fn low(check: CheckKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Low, check, message)
    }
}
