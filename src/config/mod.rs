//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, score weights, lookup tables)
//! - Library configuration types
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{CheckSettings, Config, LogFormat, LogLevel, Opt, ProviderPattern, ResolverBackend};
