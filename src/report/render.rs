//! Report rendering (colored text and JSON).

use colored::{ColoredString, Colorize};

use super::DeliverabilityReport;
use crate::checks::{Issue, Severity};
use crate::config::{SCORE_FAIR_THRESHOLD, SCORE_GOOD_THRESHOLD, SPF_MAX_LOOKUPS};

/// PASS when valid without issues, WARN when valid with issues, FAIL otherwise.
fn status(valid: bool, issues: &[Issue]) -> ColoredString {
    match (valid, issues.is_empty()) {
        (true, true) => "✓ PASS".green(),
        (true, false) => "⚠ WARN".yellow(),
        (false, _) => "✗ FAIL".red(),
    }
}

fn colored_score(score: u8) -> ColoredString {
    let text = format!("{score}/100");
    if score >= SCORE_GOOD_THRESHOLD {
        text.green()
    } else if score >= SCORE_FAIR_THRESHOLD {
        text.yellow()
    } else {
        text.red()
    }
}

fn push_issues(lines: &mut Vec<String>, issues: &[Issue]) {
    for issue in issues {
        lines.push(format!("  {} {}", "⚠".yellow(), issue.message));
    }
}

/// Renders the report as human-readable text with ANSI colors.
///
/// With `verbose`, the per-check score breakdown is appended.
pub fn render_text(report: &DeliverabilityReport, verbose: bool) -> String {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(
        format!("Email Deliverability Report: {}", report.domain)
            .bold()
            .to_string(),
    );
    lines.push(format!("Timestamp: {}", report.timestamp.to_rfc3339()));
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        "Health Score:".bold(),
        colored_score(report.health_score).bold()
    ));

    let spf = &report.spf;
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        "SPF Record:".bold(),
        status(spf.valid, &spf.issues)
    ));
    if spf.valid {
        lines.push(format!("  Record: {}", spf.record.as_deref().unwrap_or_default()));
        lines.push(format!("  Enforcement: {}", spf.enforcement));
        lines.push(format!(
            "  DNS Lookups: {}/{}",
            spf.lookup_count, SPF_MAX_LOOKUPS
        ));
    }
    push_issues(&mut lines, &spf.issues);

    let dkim = &report.dkim;
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        "DKIM:".bold(),
        status(dkim.found, &dkim.issues)
    ));
    if dkim.found {
        lines.push(format!("  Selectors: {}", dkim.selectors.join(", ")));
    }
    push_issues(&mut lines, &dkim.issues);

    let dmarc = &report.dmarc;
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        "DMARC:".bold(),
        status(dmarc.valid, &dmarc.issues)
    ));
    if dmarc.valid {
        let policy = dmarc
            .policy
            .map_or_else(|| "unrecognized".to_string(), |p| p.to_string());
        lines.push(format!("  Policy: {policy}"));
        if let Some(rua) = &dmarc.rua {
            lines.push(format!("  Reporting (rua): {rua}"));
        }
        if let Some(ruf) = &dmarc.ruf {
            lines.push(format!("  Reporting (ruf): {ruf}"));
        }
    }
    push_issues(&mut lines, &dmarc.issues);

    let mx = &report.mx;
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        "MX Records:".bold(),
        status(mx.valid, &mx.issues)
    ));
    if mx.valid {
        for record in &mx.records {
            lines.push(format!("  Priority {}: {}", record.priority, record.host));
        }
        if let Some(provider) = &mx.provider {
            lines.push(format!("  Provider: {provider}"));
        }
    }
    push_issues(&mut lines, &mx.issues);

    if verbose {
        let breakdown = report.breakdown();
        lines.push(String::new());
        lines.push("Score Breakdown:".bold().to_string());
        lines.push(format!("  SPF: {}/10", breakdown.spf));
        lines.push(format!("  DKIM: {}/15", breakdown.dkim));
        lines.push(format!("  DMARC: {}/15", breakdown.dmarc));
        lines.push(format!("  MX: {}/10", breakdown.mx));
        lines.push(format!("  Total: {}/50", breakdown.raw_total()));
    }

    if !report.issues.is_empty() {
        lines.push(String::new());
        lines.push("Critical Issues:".bold().to_string());
        for issue in &report.issues {
            let tag = format!("[{}]", issue.severity.to_string().to_uppercase());
            let tag = match issue.severity {
                Severity::High => tag.red(),
                Severity::Medium | Severity::Low => tag.yellow(),
            };
            lines.push(format!("  {tag} {}: {}", issue.check, issue.message));
        }
    }

    lines.join("\n")
}

/// Serializes the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render_json(report: &DeliverabilityReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_helpers::report_from;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_text_failing_domain() {
        plain();
        let report = report_from(&[], &[("google", false)], &[], &[]);
        let text = render_text(&report, false);
        assert!(text.contains("Email Deliverability Report: example.com"));
        assert!(text.contains("Timestamp: 2024-05-01T12:00:00+00:00"));
        assert!(text.contains("Health Score: 0/100"));
        assert!(text.contains("SPF Record: ✗ FAIL"));
        assert!(text.contains("Critical Issues:"));
        assert!(text.contains("  [HIGH] spf: No SPF record found"));
        assert!(text.contains("  [HIGH] mx: No MX records found"));
        assert!(!text.contains("Score Breakdown:"));
    }

    #[test]
    fn test_render_text_details() {
        plain();
        let report = report_from(
            &["v=spf1 include:_spf.google.com ~all"],
            &[("google", true), ("s1", true)],
            &["v=DMARC1; p=reject; rua=mailto:x@y.com"],
            &["5 alt1.aspmx.l.google.com.", "1 aspmx.l.google.com."],
        );
        let text = render_text(&report, false);
        assert!(text.contains("SPF Record: ✓ PASS"));
        assert!(text.contains("  Enforcement: soft_fail"));
        assert!(text.contains("  DNS Lookups: 1/10"));
        assert!(text.contains("  Selectors: google, s1"));
        assert!(text.contains("  Policy: reject"));
        assert!(text.contains("  Reporting (rua): mailto:x@y.com"));
        assert!(text.contains("  Priority 1: aspmx.l.google.com\n  Priority 5: alt1.aspmx.l.google.com"));
        assert!(text.contains("  Provider: Google Workspace"));
        assert!(!text.contains("Critical Issues:"));
    }

    #[test]
    fn test_render_text_warn_status_and_low_issue() {
        plain();
        let report = report_from(
            &["v=spf1 -all"],
            &[("google", true)],
            &["v=DMARC1; p=reject; rua=mailto:x@y.com"],
            &["10 mx.example.com.", "20 mx2.example.com."],
        );
        let text = render_text(&report, false);
        assert!(text.contains("DKIM: ⚠ WARN"));
        assert!(text.contains("  [LOW] dkim: Only one DKIM selector found"));
    }

    #[test]
    fn test_render_text_verbose_breakdown() {
        plain();
        let report = report_from(
            &["v=spf1 include:_spf.google.com ~all"],
            &[("google", false)],
            &[],
            &["10 mx1.example.com.", "20 mx2.example.com."],
        );
        let text = render_text(&report, true);
        assert!(text.contains("Health Score: 34/100"));
        assert!(text.contains("Score Breakdown:"));
        assert!(text.contains("  SPF: 7/10"));
        assert!(text.contains("  Total: 17/50"));
    }

    #[test]
    fn test_render_json_shape() {
        let report = report_from(
            &["v=spf1 -all"],
            &[("google", true), ("mail", true)],
            &["v=DMARC1; p=reject; rua=mailto:x@y.com"],
            &["20 mx2.example.com", "10 mx1.example.com"],
        );
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["health_score"], 100);
        assert_eq!(value["timestamp"], "2024-05-01T12:00:00Z");
        assert_eq!(value["spf"]["enforcement"], "hard_fail");
        assert_eq!(value["spf"]["lookup_count"], 0);
        assert_eq!(value["dkim"]["selectors"], serde_json::json!(["google", "mail"]));
        assert_eq!(value["dmarc"]["policy"], "reject");
        assert_eq!(value["dmarc"]["ruf"], serde_json::Value::Null);
        assert_eq!(value["mx"]["records"][0]["priority"], 10);
        assert_eq!(value["mx"]["records"][0]["host"], "mx1.example.com");
        assert_eq!(value["issues"], serde_json::json!([]));
    }

    #[test]
    fn test_render_json_issue_fields() {
        let report = report_from(&[], &[("google", false)], &[], &[]);
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["issues"][0]["severity"], "high");
        assert_eq!(value["issues"][0]["check"], "spf");
        assert_eq!(value["issues"][0]["message"], "No SPF record found");
        assert_eq!(value["spf"]["record"], serde_json::Value::Null);
        assert_eq!(value["dmarc"]["policy"], serde_json::Value::Null);
    }
}
