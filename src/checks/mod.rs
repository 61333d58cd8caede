//! Email authentication checks.
//!
//! Each check has a pure `analyze_*` function over answer lines and an async
//! `check_*` wrapper that issues its DNS queries:
//! - `spf`: apex TXT, `v=spf1` record
//! - `dkim`: TXT at `<selector>._domainkey.<domain>` for each common selector
//! - `dmarc`: TXT at `_dmarc.<domain>`, `v=DMARC1` record
//! - `mx`: apex MX
//!
//! Every issue is tagged with its severity by the check that raises it.

mod dkim;
mod dmarc;
mod mx;
mod spf;
mod types;

// Re-export public API
pub use dkim::{check_dkim, publishes_key, selector_name, summarize_dkim, DkimResult, SelectorProbe};
pub use dmarc::{analyze_dmarc, check_dmarc, parse_tags, DmarcPolicy, DmarcResult};
pub use mx::{analyze_mx, check_mx, detect_provider, parse_mx_line, MxRecord, MxResult};
pub use spf::{analyze_spf, check_spf, count_lookups, enforcement_level, SpfEnforcement, SpfResult};
pub use types::{CheckKind, Issue, Severity};
