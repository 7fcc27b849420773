//! Lumen engine: scan text against a compiled rule set and merge the results.
//!
//! # Pipeline
//!
//! ```text
//! &str + CompiledRuleSet
//!     │
//!     ▼
//! scan() ──► one Vec<Match> per rule
//!     │
//!     ▼
//! merge() ──► TokenStream (gapless, non-overlapping)
//! ```
//!
//! Every call is independent: the rule set is only read, and the stream is
//! built fresh. A [`ScanGuard`] bounds the work of one call; when it trips,
//! the caller gets [`TokenizationError::ScanTimeout`] and no tokens at all.
//!
//! # Debugging
//!
//! - `RUST_LOG=lumen_engine=debug`: per-call summaries.
//! - `RUST_LOG=lumen_engine=trace`: per-rule match counts (very verbose).

mod budget;
mod config;
mod errors;
mod highlighter;
mod merge;
mod registry;
mod scan;

pub use budget::{ScanBudget, ScanGuard, ScanTimeout};
pub use config::EngineConfig;
pub use errors::TokenizationError;
pub use highlighter::{tokenize_with, Highlighter};
pub use merge::merge;
pub use registry::{LanguageRegistry, RegistryBuilder};
pub use scan::{scan, Match};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=lumen_engine=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host application may already own the global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
