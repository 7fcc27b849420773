//! Bundled language rule tables.
//!
//! Each language is a pure function returning its ordered rule entries. The
//! tables reference the shared fragments in [`FragmentSet::common`]; nothing
//! here compiles a pattern until it is registered.
//!
//! ```text
//! delphi::rules() ──► RegistryBuilder::register("delphi", ..) ──► Highlighter
//! ```

pub mod delphi;

use lumen_engine::{EngineConfig, Highlighter, LanguageRegistry, RegistryBuilder};
use lumen_rules::{FragmentSet, RegistrationError, RuleEntry};

/// A bundled language: its id and its rule table.
pub struct Language {
    pub id: &'static str,
    pub rules: fn() -> Vec<RuleEntry>,
}

/// Every bundled language, in registration order.
pub const LANGUAGES: &[Language] = &[Language {
    id: delphi::ID,
    rules: delphi::rules,
}];

/// Register every bundled language on `builder`.
///
/// Stops at the first language that fails to compile; languages registered
/// before it stay installed.
pub fn register_builtin(builder: &mut RegistryBuilder) -> Result<(), RegistrationError> {
    let fragments = FragmentSet::common();
    for language in LANGUAGES {
        builder.register(language.id, &(language.rules)(), &fragments)?;
    }
    tracing::debug!(languages = LANGUAGES.len(), "bundled languages registered");
    Ok(())
}

/// A highlighter with every bundled language, compiled and budgeted per
/// `config`.
pub fn builtin_highlighter(config: &EngineConfig) -> Result<Highlighter, RegistrationError> {
    let mut builder = LanguageRegistry::builder(config.compile);
    register_builtin(&mut builder)?;
    Ok(Highlighter::with_config(builder.build(), config))
}
