//! deliverability_check library: email authentication posture of a domain
//!
//! This library queries DNS for a domain's SPF, DKIM, DMARC and MX records,
//! analyzes each record, and combines the results into a weighted 0-100
//! health score with severity-tagged issues.
//!
//! # Example
//!
//! ```no_run
//! use deliverability_check::{run_check, CheckSettings};
//! use deliverability_check::dns::StaticResolver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = StaticResolver::new()
//!     .with_txt("example.com", &["v=spf1 include:_spf.google.com ~all"])
//!     .with_mx("example.com", &["10 mx1.example.com.", "20 mx2.example.com."]);
//!
//! let report = run_check(&resolver, "example.com", &CheckSettings::default()).await?;
//! println!("Health score: {}/100", report.health_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod checks;
pub mod config;
pub mod dns;
mod domain;
pub mod error_handling;
pub mod initialization;
pub mod report;
pub mod score;

// Re-export public API
pub use checks::{CheckKind, Issue, Severity};
pub use config::{CheckSettings, Config, LogFormat, LogLevel, ResolverBackend};
pub use domain::normalize_domain;
pub use error_handling::{DomainError, ResolverError};
pub use report::{render_json, render_text, DeliverabilityReport};
pub use run::{exit_code, run, run_check};

// Internal run module (orchestrates the checks)
mod run {
    use anyhow::{Context, Result};

    use crate::checks::{check_dkim, check_dmarc, check_mx, check_spf};
    use crate::config::{CheckSettings, Config};
    use crate::dns::DnsResolver;
    use crate::domain::normalize_domain;
    use crate::error_handling::ResolverError;
    use crate::initialization::init_resolver;
    use crate::report::{assemble_report, DeliverabilityReport};

    /// Runs all four checks for `domain` against `resolver` and assembles the report.
    ///
    /// The checks, and the DKIM selector lookups within them, run concurrently.
    /// `domain` is used as given; see [`crate::normalize_domain`].
    ///
    /// # Errors
    ///
    /// Returns `ResolverError::ToolMissing` if the resolver cannot run; no report
    /// is produced in that case. Failed individual queries never error, they
    /// count as absent records.
    pub async fn run_check<R: DnsResolver>(
        resolver: &R,
        domain: &str,
        settings: &CheckSettings,
    ) -> Result<DeliverabilityReport, ResolverError> {
        log::info!("Checking deliverability for: {domain}");

        let (spf, dkim, dmarc, mx) = tokio::try_join!(
            check_spf(resolver, domain),
            check_dkim(
                resolver,
                domain,
                &settings.selectors,
                settings.max_concurrency
            ),
            check_dmarc(resolver, domain),
            check_mx(resolver, domain, &settings.providers),
        )?;

        let report = assemble_report(domain, spf, dkim, dmarc, mx);
        log::info!(
            "Health score for {}: {}/100 ({} issue{})",
            report.domain,
            report.health_score,
            report.issues.len(),
            if report.issues.len() == 1 { "" } else { "s" }
        );
        Ok(report)
    }

    /// Runs a check as described by `config`.
    ///
    /// Normalizes the domain, builds the configured resolver backend, and runs
    /// all checks.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The domain name is invalid
    /// - The dig backend is selected and `dig` is not installed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use deliverability_check::{run, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     domain: "example.com".to_string(),
    ///     ..Default::default()
    /// };
    /// let report = run(&config).await?;
    /// println!("Health score: {}", report.health_score);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(config: &Config) -> Result<DeliverabilityReport> {
        let domain = normalize_domain(&config.domain)
            .with_context(|| format!("Invalid domain '{}'", config.domain))?;
        let resolver = init_resolver(config)
            .await
            .context("Failed to initialize DNS resolver")?;
        let report = run_check(&resolver, &domain, &config.settings).await?;
        Ok(report)
    }

    /// Process exit status for a finished report: 1 below `min_score`, else 0.
    pub fn exit_code(report: &DeliverabilityReport, min_score: u8) -> i32 {
        if report.passes(min_score) {
            0
        } else {
            1
        }
    }
}
