//! DKIM selector probing.
//!
//! DKIM keys live under `<selector>._domainkey.<domain>`, and selectors cannot
//! be enumerated, so a fixed list of common selectors is probed. Lookups run
//! concurrently but results are always reported in probe order.

use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Serialize;

use super::types::{CheckKind, Issue};
use crate::dns::{DnsResolver, RecordKind};
use crate::error_handling::ResolverError;

/// Markers that identify a DKIM key record.
const DKIM_MARKERS: &[&str] = &["v=DKIM1", "k=rsa", "p="];

/// Outcome of the DKIM check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DkimResult {
    /// At least one selector publishes a key
    pub found: bool,
    /// Selectors publishing a key, in probe order
    pub selectors: Vec<String>,
    /// Findings, in the order they were raised
    pub issues: Vec<Issue>,
}

/// Result of probing one selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorProbe {
    /// The selector probed
    pub selector: String,
    /// Whether a key record was found under it
    pub published: bool,
}

/// Name queried for `selector` under `domain`.
pub fn selector_name(selector: &str, domain: &str) -> String {
    format!("{selector}._domainkey.{domain}")
}

/// Returns `true` if any answer line looks like a DKIM key record.
pub fn publishes_key(answers: &[String]) -> bool {
    answers
        .iter()
        .any(|answer| DKIM_MARKERS.iter().any(|marker| answer.contains(marker)))
}

/// Builds the DKIM result from probes already in probe order.
pub fn summarize_dkim(probes: impl IntoIterator<Item = SelectorProbe>) -> DkimResult {
    let selectors: Vec<String> = probes
        .into_iter()
        .filter(|probe| probe.published)
        .map(|probe| probe.selector)
        .collect();

    let mut issues = Vec::new();
    match selectors.len() {
        0 => issues.push(Issue::high(
            CheckKind::Dkim,
            "No DKIM records found for common selectors",
        )),
        1 => issues.push(Issue::low(
            CheckKind::Dkim,
            "Only one DKIM selector found - consider adding backup",
        )),
        _ => {}
    }

    DkimResult {
        found: !selectors.is_empty(),
        selectors,
        issues,
    }
}

/// Probes every selector for `domain` and summarizes which publish a key.
///
/// At most `max_concurrency` lookups are in flight at once. The output keeps
/// the order of `selectors` regardless of which answer arrives first.
///
/// # Errors
///
/// Returns `ResolverError` only if the resolver cannot run at all; remaining
/// lookups are abandoned.
pub async fn check_dkim<R: DnsResolver>(
    resolver: &R,
    domain: &str,
    selectors: &[String],
    max_concurrency: usize,
) -> Result<DkimResult, ResolverError> {
    let probes: Vec<SelectorProbe> = stream::iter(selectors)
        .map(move |selector| async move {
            let name = selector_name(selector, domain);
            let answers = resolver
                .query(&name, RecordKind::Txt)
                .await?
                .into_answers(&name, RecordKind::Txt);
            let published = publishes_key(&answers);
            if published {
                log::debug!("DKIM selector '{selector}' found");
            }
            Ok::<_, ResolverError>(SelectorProbe {
                selector: selector.clone(),
                published,
            })
        })
        .buffered(max_concurrency.max(1))
        .try_collect()
        .await?;

    Ok(summarize_dkim(probes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Severity;
    use crate::dns::StaticResolver;
    use std::time::Duration;

    fn probe(selector: &str, published: bool) -> SelectorProbe {
        SelectorProbe {
            selector: selector.to_string(),
            published,
        }
    }

    fn selectors(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selector_name() {
        assert_eq!(
            selector_name("google", "example.com"),
            "google._domainkey.example.com"
        );
    }

    #[test]
    fn test_publishes_key_markers() {
        assert!(publishes_key(&["v=DKIM1; k=rsa; p=MIGf".to_string()]));
        assert!(publishes_key(&["k=rsa".to_string()]));
        assert!(publishes_key(&["p=MIGfMA0".to_string()]));
        assert!(!publishes_key(&["v=spf1 -all".to_string()]));
        assert!(!publishes_key(&[]));
    }

    #[test]
    fn test_summarize_none_found() {
        let result = summarize_dkim(vec![probe("google", false), probe("s1", false)]);
        assert!(!result.found);
        assert!(result.selectors.is_empty());
        assert_eq!(result.issues.len(), 1);
        assert_eq!(
            result.issues[0].message,
            "No DKIM records found for common selectors"
        );
        assert_eq!(result.issues[0].severity, Severity::High);
    }

    #[test]
    fn test_summarize_single_selector_is_low() {
        let result = summarize_dkim(vec![probe("google", true), probe("s1", false)]);
        assert!(result.found);
        assert_eq!(result.selectors, vec!["google"]);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Low);
        assert!(result.issues[0].message.starts_with("Only one DKIM selector found"));
    }

    #[test]
    fn test_summarize_multiple_selectors() {
        let result = summarize_dkim(vec![probe("google", true), probe("mail", true)]);
        assert!(result.found);
        assert_eq!(result.selectors, vec!["google", "mail"]);
        assert!(result.issues.is_empty());
    }

    #[tokio::test]
    async fn test_check_dkim_keeps_probe_order_under_concurrency() {
        // "google" answers last, "mail" answers first
        let resolver = StaticResolver::new()
            .with_txt("google._domainkey.example.com", &["v=DKIM1; k=rsa; p=AAA"])
            .with_delay("google._domainkey.example.com", Duration::from_millis(50))
            .with_txt("mail._domainkey.example.com", &["v=DKIM1; p=BBB"]);

        let probe_list = selectors(&["google", "default", "selector1", "mail", "email"]);
        let result = check_dkim(&resolver, "example.com", &probe_list, 8)
            .await
            .unwrap();
        assert_eq!(result.selectors, vec!["google", "mail"]);
        assert!(result.issues.is_empty());
    }

    #[tokio::test]
    async fn test_check_dkim_sequential() {
        let resolver = StaticResolver::new()
            .with_txt("s2._domainkey.example.com", &["k=rsa; p=CCC"]);
        let probe_list = selectors(&["s1", "s2"]);
        let result = check_dkim(&resolver, "example.com", &probe_list, 1)
            .await
            .unwrap();
        assert_eq!(result.selectors, vec!["s2"]);
    }

    #[tokio::test]
    async fn test_check_dkim_failed_lookup_counts_as_absent() {
        let resolver = StaticResolver::new()
            .with_txt("google._domainkey.example.com", &["v=DKIM1; p=AAA"])
            .with_failure("google._domainkey.example.com")
            .with_txt("s1._domainkey.example.com", &["v=DKIM1; p=AAA"]);
        let probe_list = selectors(&["google", "s1"]);
        let result = check_dkim(&resolver, "example.com", &probe_list, 4)
            .await
            .unwrap();
        assert_eq!(result.selectors, vec!["s1"]);
    }

    #[tokio::test]
    async fn test_check_dkim_tool_missing_aborts() {
        let resolver = StaticResolver::new().with_tool_missing();
        let probe_list = selectors(&["google"]);
        let result = check_dkim(&resolver, "example.com", &probe_list, 4).await;
        assert!(matches!(result, Err(ResolverError::ToolMissing { .. })));
    }

    #[tokio::test]
    async fn test_check_dkim_empty_selector_list() {
        let resolver = StaticResolver::new();
        let result = check_dkim(&resolver, "example.com", &[], 4).await.unwrap();
        assert!(!result.found);
        assert_eq!(result.issues[0].severity, Severity::High);
    }
}
