//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, limits, score weights, and the default lookup tables.

/// DNS query timeout in seconds.
///
/// Applied to every single query (each `dig` invocation, or each in-process lookup).
pub const DNS_TIMEOUT_SECS: u64 = 10;

/// Default executable used by the dig backend.
pub const DEFAULT_DIG_PATH: &str = "dig";

/// Maximum number of DKIM selector lookups in flight at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Health score below which the CLI exits with a failure status.
pub const DEFAULT_MIN_SCORE: u8 = 60;

/// RFC 7208 ceiling on DNS-querying SPF terms.
pub const SPF_MAX_LOOKUPS: u32 = 10;

/// Common DKIM selectors, in probe order.
///
/// Order matters: found selectors are reported in this order.
pub const DEFAULT_DKIM_SELECTORS: &[&str] = &[
    "google",
    "default",
    "selector1",
    "selector2",
    "k1",
    "mandrill",
    "dkim",
    "s1",
    "s2",
    "mail",
    "email",
];

/// MX hostname substrings mapped to the mail provider they identify.
///
/// Checked in order; the first match wins.
pub const DEFAULT_MX_PROVIDERS: &[(&str, &str)] = &[
    ("aspmx.l.google.com", "Google Workspace"),
    ("googlemail.com", "Google Workspace"),
    ("mail.protection.outlook.com", "Microsoft 365"),
    ("pphosted.com", "Proofpoint"),
    ("mimecast.com", "Mimecast"),
    ("messagelabs.com", "Symantec"),
];

// Score weights (points out of SCORE_RAW_MAX)
/// SPF record ending in `-all`.
pub const SPF_POINTS_HARD_FAIL: u32 = 10;
/// SPF record ending in `~all`.
pub const SPF_POINTS_SOFT_FAIL: u32 = 7;
/// Any other SPF record.
pub const SPF_POINTS_OTHER: u32 = 3;
/// At least one DKIM selector publishes a key.
pub const DKIM_POINTS_FOUND: u32 = 15;
/// DMARC `p=reject`.
pub const DMARC_POINTS_REJECT: u32 = 15;
/// DMARC `p=quarantine`.
pub const DMARC_POINTS_QUARANTINE: u32 = 11;
/// DMARC `p=none`.
pub const DMARC_POINTS_NONE: u32 = 5;
/// Domain has MX records.
pub const MX_POINTS_VALID: u32 = 10;
/// Sum of the best-case points of all four checks.
pub const SCORE_RAW_MAX: u32 = 50;

// Renderer thresholds
/// Scores at or above this are shown in green.
pub const SCORE_GOOD_THRESHOLD: u8 = 80;
/// Scores at or above this (and below the good threshold) are shown in yellow.
pub const SCORE_FAIR_THRESHOLD: u8 = 60;
