//! Registration-time errors.
//!
//! Every variant is raised while a language is being compiled, never while
//! text is being scanned. A language whose rules fail to compile is not
//! installed at all.

/// Why a rule list could not be turned into a [`CompiledRuleSet`](crate::CompiledRuleSet).
///
/// `index` fields refer to the flattened rule list (fragments expanded), except
/// for [`UnknownFragment`](Self::UnknownFragment), where the fragment never
/// expanded and `entry` is the position in the authored list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The pattern (or its context pattern) failed to compile.
    #[error("rule {index}: invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        message: String,
    },

    /// A per-group type list does not line up with the pattern's capture groups.
    #[error("rule {index}: {types} group type(s) given but the pattern has {groups} capture group(s)")]
    GroupArityMismatch {
        index: usize,
        types: usize,
        groups: usize,
    },

    /// A fragment reference did not resolve in the fragment library.
    #[error("entry {entry}: unknown fragment `{name}`")]
    UnknownFragment { entry: usize, name: String },

    /// A language id was registered twice.
    #[error("language `{0}` is already registered")]
    DuplicateLanguage(String),
}
