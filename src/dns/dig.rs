//! `dig` subprocess backend.
//!
//! Each query runs `dig +short -t <type> -q <name>` with its own timeout. A missing
//! executable is the only condition reported as an error; everything else
//! becomes a [`LookupOutcome::Failed`].

use std::io;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use super::extract::clean_output;
use super::types::{LookupOutcome, RecordKind};
use super::DnsResolver;
use crate::error_handling::{QueryFailure, ResolverError};

/// Resolver that shells out to `dig`.
#[derive(Debug, Clone)]
pub struct DigResolver {
    program: String,
    timeout: Duration,
}

impl DigResolver {
    /// Creates a resolver running `program` with a per-query `timeout`.
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// The executable this resolver runs.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Checks once that the executable can be launched.
    ///
    /// Runs `<program> -v`. Only "not found" is an error; any exit status,
    /// or even a hang, proves the tool exists.
    ///
    /// # Errors
    ///
    /// Returns `ResolverError::ToolMissing` if the executable cannot be found.
    pub async fn ensure_available(&self) -> Result<(), ResolverError> {
        let mut command = Command::new(&self.program);
        command
            .arg("-v")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        match tokio::time::timeout(self.timeout, command.status()).await {
            Ok(Err(e)) if e.kind() == io::ErrorKind::NotFound => Err(self.tool_missing()),
            Ok(Err(e)) => {
                log::warn!("Could not probe '{}': {e}", self.program);
                Ok(())
            }
            Ok(Ok(_)) | Err(_) => Ok(()),
        }
    }

    fn tool_missing(&self) -> ResolverError {
        ResolverError::ToolMissing {
            tool: self.program.clone(),
        }
    }
}

impl DnsResolver for DigResolver {
    async fn query(&self, name: &str, kind: RecordKind) -> Result<LookupOutcome, ResolverError> {
        log::trace!("{} +short -t {} -q {name}", self.program, kind.dig_arg());

        let mut command = Command::new(&self.program);
        // -t/-q keep the name from ever being read as a dig option
        command
            .arg("+short")
            .args(["-t", kind.dig_arg()])
            .args(["-q", name])
            .stdin(Stdio::null())
            .kill_on_drop(true);

        // Dropping the output future on timeout kills the child
        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => return Ok(LookupOutcome::Failed(QueryFailure::Timeout(self.timeout))),
            Ok(Err(e)) if e.kind() == io::ErrorKind::NotFound => return Err(self.tool_missing()),
            Ok(Err(e)) => return Ok(LookupOutcome::Failed(QueryFailure::Io(e.to_string()))),
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            let failure = match output.status.code() {
                Some(code) => QueryFailure::ExitStatus(code),
                None => QueryFailure::Terminated,
            };
            return Ok(LookupOutcome::Failed(failure));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(LookupOutcome::from_answers(clean_output(&stdout)))
    }
}
