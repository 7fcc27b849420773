//! Engine configuration with environment overrides.
//!
//! | Variable | Effect |
//! |---|---|
//! | `LUMEN_SCAN_TIMEOUT_MS` | Per-call time limit in milliseconds, `0` disables |
//! | `LUMEN_SCAN_MAX_MATCHES` | Per-call candidate match limit, `0` disables |
//! | `LUMEN_REGEX_SIZE_LIMIT` | Compiled size limit per pattern, in bytes |
//!
//! Unparsable values are ignored with a warning and the default is kept.

use std::time::Duration;

use lumen_rules::CompileOptions;

use crate::ScanBudget;

pub const SCAN_TIMEOUT_MS_VAR: &str = "LUMEN_SCAN_TIMEOUT_MS";
pub const SCAN_MAX_MATCHES_VAR: &str = "LUMEN_SCAN_MAX_MATCHES";
pub const REGEX_SIZE_LIMIT_VAR: &str = "LUMEN_REGEX_SIZE_LIMIT";

/// Settings for registration and tokenization.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Limits applied to every tokenize call.
    pub budget: ScanBudget,
    /// Limits applied while compiling language rules.
    pub compile: CompileOptions,
}

impl EngineConfig {
    /// Defaults overridden by `LUMEN_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = EngineConfig::default();

        if let Some(ms) = parse_var::<u64>(&lookup, SCAN_TIMEOUT_MS_VAR) {
            config.budget.time_limit = (ms > 0).then(|| Duration::from_millis(ms));
        }
        if let Some(max) = parse_var::<usize>(&lookup, SCAN_MAX_MATCHES_VAR) {
            config.budget.max_matches = (max > 0).then_some(max);
        }
        if let Some(limit) = parse_var::<usize>(&lookup, REGEX_SIZE_LIMIT_VAR) {
            config.compile.size_limit = limit;
        }

        config
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = key, value = %raw, "ignoring malformed configuration value");
            None
        }
    }
}
