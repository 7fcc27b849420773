//! Read-only lookup of compiled rule sets by language id.
//!
//! Registration compiles immediately. A language whose rules fail to compile
//! is never installed; the registry only ever holds complete rule sets.

use std::sync::Arc;

use lumen_rules::{
    compile, CompileOptions, CompiledRuleSet, FragmentLibrary, RegistrationError, RuleEntry,
};
use rustc_hash::FxHashMap;

/// Frozen map from language id to its compiled rules.
#[derive(Clone, Debug, Default)]
pub struct LanguageRegistry {
    languages: FxHashMap<String, Arc<CompiledRuleSet>>,
}

impl LanguageRegistry {
    pub fn builder(options: CompileOptions) -> RegistryBuilder {
        RegistryBuilder {
            options,
            languages: FxHashMap::default(),
        }
    }

    /// Rules for `language_id`. Ids are case-sensitive.
    pub fn get(&self, language_id: &str) -> Option<&Arc<CompiledRuleSet>> {
        self.languages.get(language_id)
    }

    pub fn contains(&self, language_id: &str) -> bool {
        self.languages.contains_key(language_id)
    }

    /// Registered ids in sorted order.
    pub fn languages(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Collects languages before the registry is frozen.
#[derive(Debug)]
pub struct RegistryBuilder {
    options: CompileOptions,
    languages: FxHashMap<String, Arc<CompiledRuleSet>>,
}

impl RegistryBuilder {
    /// Compile and install one language.
    ///
    /// On error nothing is installed for `language_id` and the builder is
    /// left as it was.
    #[tracing::instrument(level = "debug", skip(self, rules, fragments), fields(entries = rules.len()))]
    pub fn register(
        &mut self,
        language_id: &str,
        rules: &[RuleEntry],
        fragments: &dyn FragmentLibrary,
    ) -> Result<&mut Self, RegistrationError> {
        if self.languages.contains_key(language_id) {
            return Err(RegistrationError::DuplicateLanguage(language_id.to_owned()));
        }

        let compiled = compile(rules, fragments, &self.options).inspect_err(|err| {
            tracing::debug!(%err, "language rejected");
        })?;

        tracing::debug!(rules = compiled.len(), "language registered");
        self.languages
            .insert(language_id.to_owned(), Arc::new(compiled));
        Ok(self)
    }

    pub fn build(self) -> LanguageRegistry {
        LanguageRegistry {
            languages: self.languages,
        }
    }
}
