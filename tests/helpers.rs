// Shared test helpers for canned DNS data.
//
// This module provides resolvers preloaded with the DNS data of common scenarios.

use std::time::Duration;

use deliverability_check::dns::StaticResolver;

/// Domain used by every scenario.
#[allow(dead_code)] // Used by other test files
pub const DOMAIN: &str = "example.com";

/// A domain without any records at all.
#[allow(dead_code)]
pub fn empty_resolver() -> StaticResolver {
    StaticResolver::new()
}

/// SPF soft fail with one include, no DKIM, no DMARC, two MX records.
#[allow(dead_code)]
pub fn soft_fail_resolver() -> StaticResolver {
    StaticResolver::new()
        .with_txt(
            DOMAIN,
            &[
                "google-site-verification=abc123",
                "v=spf1 include:_spf.google.com ~all",
            ],
        )
        .with_mx(DOMAIN, &["20 mx2.example.com.", "10 mx1.example.com."])
}

/// Everything configured at its strongest, with DKIM answers arriving out of order.
#[allow(dead_code)]
pub fn best_case_resolver() -> StaticResolver {
    StaticResolver::new()
        .with_txt(DOMAIN, &["v=spf1 include:_spf.google.com -all"])
        .with_txt(
            "google._domainkey.example.com",
            &["v=DKIM1; k=rsa; p=MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA"],
        )
        .with_delay("google._domainkey.example.com", Duration::from_millis(40))
        .with_txt(
            "mail._domainkey.example.com",
            &["v=DKIM1; k=rsa; p=MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQC"],
        )
        .with_txt(
            "_dmarc.example.com",
            &["v=DMARC1; p=reject; rua=mailto:dmarc@example.com; ruf=mailto:forensic@example.com"],
        )
        .with_mx(
            DOMAIN,
            &[
                "10 alt1.aspmx.l.google.com.",
                "1 aspmx.l.google.com.",
                "5 alt2.aspmx.l.google.com.",
            ],
        )
}
