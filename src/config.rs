//! TOML configuration for the solver.
//!
//! Every key is optional; a missing file section falls back to the built-in
//! defaults. Command-line flags override whatever the file says.
//!
//! ```toml
//! method = "tabulated"
//! sieve_limit = 400
//! trace = false
//! ```

use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::counter::Method;
use crate::sieve::{DEFAULT_SIEVE_LIMIT, MAX_SIEVE_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Counting strategy.
    pub method: Method,
    /// Largest digit sum the primality table classifies.
    pub sieve_limit: usize,
    /// Emit bucket and digit trace events.
    pub trace: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            method: Method::default(),
            sieve_limit: DEFAULT_SIEVE_LIMIT,
            trace: false,
        }
    }
}

impl SolverConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: SolverConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        method: Option<Method>,
        sieve_limit: Option<usize>,
        trace: bool,
    ) -> Result<Self> {
        if let Some(method) = method {
            self.method = method;
        }
        if let Some(limit) = sieve_limit {
            self.sieve_limit = limit;
        }
        self.trace |= trace;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.sieve_limit >= 9,
            "sieve_limit must be at least 9 to classify single-digit sums (got {})",
            self.sieve_limit
        );
        ensure!(
            self.sieve_limit <= MAX_SIEVE_LIMIT,
            "sieve_limit must be at most {} (got {})",
            MAX_SIEVE_LIMIT,
            self.sieve_limit
        );
        Ok(())
    }
}
