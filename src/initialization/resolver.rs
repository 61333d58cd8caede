//! DNS resolver initialization.
//!
//! This module builds the resolver backend selected in the configuration.

use std::time::Duration;

use crate::config::{Config, ResolverBackend};
use crate::dns::{DigResolver, Resolver, SystemResolver};
use crate::error_handling::ResolverError;

/// Initializes the DNS resolver for the run.
///
/// For the dig backend, the executable is probed once here so that a missing
/// tool aborts the run before any query is issued.
///
/// # Errors
///
/// Returns `ResolverError::ToolMissing` if the dig backend is selected and the
/// executable cannot be found.
pub async fn init_resolver(config: &Config) -> Result<Resolver, ResolverError> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    match config.resolver {
        ResolverBackend::Dig => {
            let resolver = DigResolver::new(config.dig_path.clone(), timeout);
            resolver.ensure_available().await?;
            log::debug!("Using dig backend ({})", resolver.program());
            Ok(Resolver::Dig(resolver))
        }
        ResolverBackend::System => {
            log::debug!("Using in-process resolver backend");
            Ok(Resolver::System(SystemResolver::new(timeout)))
        }
    }
}
