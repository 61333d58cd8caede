//! DNS query types.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::error_handling::QueryFailure;

/// Record types the checks ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// Text records (SPF, DKIM, DMARC)
    Txt,
    /// Mail exchanger records
    Mx,
}

impl RecordKind {
    /// The record type as passed on the `dig` command line.
    pub fn dig_arg(self) -> &'static str {
        match self {
            RecordKind::Txt => "txt",
            RecordKind::Mx => "mx",
        }
    }
}

/// Result of a single DNS query.
///
/// A failed query is kept apart from a genuinely absent record so it can be
/// logged, but [`LookupOutcome::into_answers`] hands both to the checks as an
/// empty answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// At least one answer line, in resolver order.
    Answers(Vec<String>),
    /// The query succeeded and returned nothing.
    Absent,
    /// The query timed out or the resolver reported an error.
    Failed(QueryFailure),
}

impl LookupOutcome {
    /// Wraps cleaned answer lines, mapping an empty list to `Absent`.
    pub fn from_answers(answers: Vec<String>) -> Self {
        if answers.is_empty() {
            LookupOutcome::Absent
        } else {
            LookupOutcome::Answers(answers)
        }
    }

    /// Returns `true` unless the outcome carries answers.
    pub fn is_empty(&self) -> bool {
        !matches!(self, LookupOutcome::Answers(_))
    }

    /// Collapses the outcome into the answer list seen by the checks.
    ///
    /// Failures are logged and then treated as an absent record.
    pub fn into_answers(self, name: &str, kind: RecordKind) -> Vec<String> {
        match self {
            LookupOutcome::Answers(answers) => answers,
            LookupOutcome::Absent => {
                log::debug!("No {kind} records for {name}");
                Vec::new()
            }
            LookupOutcome::Failed(failure) => {
                log::warn!("{kind} lookup for {name} failed, treating as absent: {failure}");
                Vec::new()
            }
        }
    }
}
