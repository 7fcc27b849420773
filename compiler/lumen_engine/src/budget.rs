//! Per-call work limits.
//!
//! Input text is untrusted. The `regex` crate keeps each search linear, but a
//! large rule set over a large input still multiplies out; the guard turns an
//! overrun into an error instead of a hang.

use std::time::{Duration, Instant};

/// Limits for one tokenize call. `None` disables a limit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScanBudget {
    /// Wall-clock limit for scanning, checked before every regex search.
    pub time_limit: Option<Duration>,
    /// Maximum number of candidate matches collected across all rules.
    pub max_matches: Option<usize>,
}

impl ScanBudget {
    /// No limits at all.
    pub const UNLIMITED: ScanBudget = ScanBudget {
        time_limit: None,
        max_matches: None,
    };

    pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(2);
    pub const DEFAULT_MAX_MATCHES: usize = 1_000_000;
}

impl Default for ScanBudget {
    fn default() -> Self {
        ScanBudget {
            time_limit: Some(Self::DEFAULT_TIME_LIMIT),
            max_matches: Some(Self::DEFAULT_MAX_MATCHES),
        }
    }
}

/// The budget of a call ran out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("scan budget exhausted after {elapsed:?} ({matches} matches, {steps} searches)")]
pub struct ScanTimeout {
    pub elapsed: Duration,
    pub matches: usize,
    pub steps: usize,
}

/// Running account of one call against its [`ScanBudget`].
#[derive(Debug)]
pub struct ScanGuard {
    started: Instant,
    deadline: Option<Instant>,
    max_matches: Option<usize>,
    matches: usize,
    steps: usize,
}

impl ScanGuard {
    pub fn new(budget: &ScanBudget) -> Self {
        let started = Instant::now();
        ScanGuard {
            started,
            // A limit too large to represent is no limit.
            deadline: budget
                .time_limit
                .and_then(|limit| started.checked_add(limit)),
            max_matches: budget.max_matches,
            matches: 0,
            steps: 0,
        }
    }

    /// Account for one regex search; fails once the deadline has passed.
    #[inline]
    pub fn step(&mut self) -> Result<(), ScanTimeout> {
        self.steps += 1;
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(self.timeout()),
            _ => Ok(()),
        }
    }

    /// Account for one collected match; fails once the match limit is exceeded.
    #[inline]
    pub fn record_match(&mut self) -> Result<(), ScanTimeout> {
        self.matches += 1;
        match self.max_matches {
            Some(max) if self.matches > max => Err(self.timeout()),
            _ => Ok(()),
        }
    }

    pub fn matches(&self) -> usize {
        self.matches
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn timeout(&self) -> ScanTimeout {
        ScanTimeout {
            elapsed: self.elapsed(),
            matches: self.matches,
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests;
