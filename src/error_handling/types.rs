//! Error type definitions.
//!
//! This module defines the fatal and soft error types used throughout the application.

use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors that abort the whole run.
///
/// Anything that goes wrong with a single DNS query is a [`QueryFailure`]
/// instead, and is absorbed by the check that issued it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// The external resolution tool is not installed.
    #[error("'{tool}' command not found. Please install the dnsutils package.")]
    ToolMissing {
        /// Executable that could not be found
        tool: String,
    },
}

/// A single DNS query that did not produce an answer.
///
/// Callers treat this exactly like an absent record; it is kept separate so
/// that it can be logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryFailure {
    /// The query did not finish within the timeout.
    #[error("query timed out after {0:?}")]
    Timeout(Duration),

    /// The resolution tool exited with a non-zero status.
    #[error("resolver exited with status {0}")]
    ExitStatus(i32),

    /// The resolution tool was killed by a signal.
    #[error("resolver terminated by signal")]
    Terminated,

    /// The resolution tool could not be run (for a reason other than being absent).
    #[error("failed to run resolver: {0}")]
    Io(String),

    /// The in-process resolver reported an error.
    #[error("lookup failed: {0}")]
    Resolve(String),
}

/// Error for domain names that cannot be checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Nothing left after trimming.
    #[error("domain name is empty")]
    Empty,

    /// The name contains a character that cannot appear in a DNS name.
    #[error("invalid character {ch:?} in domain name '{domain}'")]
    InvalidCharacter {
        /// The domain as given
        domain: String,
        /// First offending character
        ch: char,
    },

    /// The name contains an empty label (e.g. `example..com`).
    #[error("empty label in domain name '{0}'")]
    EmptyLabel(String),

    /// A label starts or ends with a hyphen (e.g. `-h` or `example-.com`).
    #[error("label starts or ends with '-' in domain name '{0}'")]
    HyphenatedLabel(String),

    /// An internationalized name that has no valid ASCII form.
    #[error("invalid internationalized domain name '{domain}': {reason}")]
    InvalidInternationalName {
        /// The domain as given
        domain: String,
        /// Why the conversion failed
        reason: String,
    },
}
