//! Per-call tokenization errors.
//!
//! None of these leave anything behind: the shared rule sets are untouched
//! and the caller receives no partial stream.

use crate::ScanTimeout;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenizationError {
    /// No rule set is registered under this id.
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    /// The call's [`ScanBudget`](crate::ScanBudget) ran out.
    #[error(transparent)]
    ScanTimeout(#[from] ScanTimeout),

    /// Offsets are 32-bit; longer inputs are refused up front.
    #[error("input of {len} bytes exceeds the 4 GiB limit")]
    InputTooLarge { len: usize },
}
