//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DIG_PATH, DEFAULT_DKIM_SELECTORS, DEFAULT_MAX_CONCURRENCY, DEFAULT_MIN_SCORE,
    DEFAULT_MX_PROVIDERS, DNS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which DNS backend answers the queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResolverBackend {
    /// Shell out to `dig +short` (requires the dnsutils package)
    Dig,
    /// In-process lookups through the system resolver configuration
    System,
}

/// A hostname substring that identifies a mail provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPattern {
    /// Substring searched for in MX hostnames
    pub pattern: String,
    /// Provider label reported when the pattern matches
    pub provider: String,
}

impl ProviderPattern {
    /// Creates a new pattern/provider pair.
    pub fn new(pattern: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            provider: provider.into(),
        }
    }
}

/// Lookup tables and limits used by the checks.
///
/// Built once per run and only read afterwards, so concurrent lookups never
/// share mutable state.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// DKIM selectors in probe order
    pub selectors: Vec<String>,
    /// MX provider patterns, checked in order
    pub providers: Vec<ProviderPattern>,
    /// Maximum DKIM lookups in flight at once (at least 1)
    pub max_concurrency: usize,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_DKIM_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            providers: DEFAULT_MX_PROVIDERS
                .iter()
                .map(|(pattern, provider)| ProviderPattern::new(*pattern, *provider))
                .collect(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use deliverability_check::Config;
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain to check
    pub domain: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// DNS backend
    pub resolver: ResolverBackend,

    /// Executable used by the dig backend
    pub dig_path: String,

    /// Per-query timeout in seconds
    pub timeout_seconds: u64,

    /// Selector and provider tables plus concurrency limit
    pub settings: CheckSettings,

    /// Health score below which the run counts as failed
    pub min_score: u8,

    /// Emit the report as JSON instead of colored text
    pub json: bool,

    /// Show detailed progress and the score breakdown
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            resolver: ResolverBackend::Dig,
            dig_path: DEFAULT_DIG_PATH.to_string(),
            timeout_seconds: DNS_TIMEOUT_SECS,
            settings: CheckSettings::default(),
            min_score: DEFAULT_MIN_SCORE,
            json: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Log level actually applied: `--verbose` raises it to at least `debug`.
    pub fn effective_log_level(&self) -> log::LevelFilter {
        let level = log::LevelFilter::from(self.log_level.clone());
        if self.verbose {
            level.max(log::LevelFilter::Debug)
        } else {
            level
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// deliverability_check example.com
///
/// # Machine-readable output
/// deliverability_check example.com --json
///
/// # Only probe two selectors, using the in-process resolver
/// deliverability_check example.com --resolver system --selectors google,s1
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "deliverability_check",
    about = "Check email deliverability health via DNS records"
)]
pub struct Opt {
    /// Domain to check (e.g., example.com)
    pub domain: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Show detailed progress
    #[arg(long)]
    pub verbose: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// DNS backend: dig|system
    #[arg(long, value_enum, default_value_t = ResolverBackend::Dig)]
    pub resolver: ResolverBackend,

    /// Path to the dig executable
    #[arg(long, default_value = DEFAULT_DIG_PATH)]
    pub dig_path: String,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Comma-separated DKIM selectors to probe, replacing the built-in list
    #[arg(long, value_delimiter = ',')]
    pub selectors: Option<Vec<String>>,

    /// Maximum DKIM lookups in flight at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Exit with status 1 when the health score is below this value
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: u8,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let mut settings = CheckSettings {
            max_concurrency: opt.max_concurrency.max(1),
            ..Default::default()
        };
        if let Some(selectors) = opt.selectors {
            settings.selectors = selectors
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Self {
            domain: opt.domain,
            log_level: opt.log_level,
            log_format: opt.log_format,
            resolver: opt.resolver,
            dig_path: opt.dig_path,
            timeout_seconds: opt.timeout_seconds,
            settings,
            min_score: opt.min_score,
            json: opt.json,
            verbose: opt.verbose,
        }
    }
}
