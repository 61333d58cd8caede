//! DNS answer cleaning and record extraction utilities.
//!
//! This module turns raw resolver output into answer lines and picks specific
//! records (SPF, DMARC) out of TXT answer collections.

/// Version tag that starts an SPF record.
pub const SPF_PREFIX: &str = "v=spf1";

/// Version tag that starts a DMARC record.
pub const DMARC_PREFIX: &str = "v=DMARC1";

/// Splits `dig +short` output into answer lines.
///
/// Each line is trimmed of surrounding whitespace and then of surrounding
/// double quotes; blank lines are dropped and order is kept.
pub fn clean_output(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|line| line.trim().trim_matches('"'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the first answer that starts with `prefix`.
pub fn find_record<'a>(answers: &'a [String], prefix: &str) -> Option<&'a str> {
    answers
        .iter()
        .map(String::as_str)
        .find(|answer| answer.starts_with(prefix))
}

/// Extracts the SPF record from TXT answers.
///
/// SPF records start with "v=spf1". Returns the first one found, or `None`.
pub fn extract_spf_record(answers: &[String]) -> Option<&str> {
    find_record(answers, SPF_PREFIX)
}

/// Extracts the DMARC record from TXT answers.
///
/// DMARC records start with "v=DMARC1". Returns the first one found, or `None`.
pub fn extract_dmarc_record(answers: &[String]) -> Option<&str> {
    find_record(answers, DMARC_PREFIX)
}
