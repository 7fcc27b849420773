//! Public tokenize API.

use lumen_ir::TokenStream;
use lumen_rules::CompiledRuleSet;

use crate::{
    merge, scan, EngineConfig, LanguageRegistry, ScanBudget, ScanGuard, TokenizationError,
};

/// Tokenize `text` with an already compiled rule set.
///
/// Either the complete stream or an error; a tripped budget never yields a
/// truncated stream.
pub fn tokenize_with(
    rules: &CompiledRuleSet,
    text: &str,
    budget: &ScanBudget,
) -> Result<TokenStream, TokenizationError> {
    let text_len =
        u32::try_from(text.len()).map_err(|_| TokenizationError::InputTooLarge { len: text.len() })?;

    let mut guard = ScanGuard::new(budget);
    let matches = scan(rules, text, &mut guard)?;
    let stream = merge(matches, text_len);

    tracing::debug!(
        tokens = stream.len(),
        matches = guard.matches(),
        elapsed = ?guard.elapsed(),
        "tokenized"
    );
    Ok(stream)
}

/// Registered languages plus the per-call budget.
///
/// Immutable after construction; share it by reference or `Arc` across
/// threads and call [`tokenize`](Self::tokenize) concurrently.
#[derive(Clone, Debug)]
pub struct Highlighter {
    registry: LanguageRegistry,
    budget: ScanBudget,
}

impl Highlighter {
    pub fn new(registry: LanguageRegistry, budget: ScanBudget) -> Self {
        Highlighter { registry, budget }
    }

    /// Use the scan budget from `config`.
    pub fn with_config(registry: LanguageRegistry, config: &EngineConfig) -> Self {
        Self::new(registry, config.budget)
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn budget(&self) -> &ScanBudget {
        &self.budget
    }

    /// Registered language ids in sorted order.
    pub fn languages(&self) -> Vec<&str> {
        self.registry.languages()
    }

    /// Tokenize `text` as `language_id`.
    #[tracing::instrument(level = "debug", skip(self, text), fields(len = text.len()))]
    pub fn tokenize(&self, language_id: &str, text: &str) -> Result<TokenStream, TokenizationError> {
        let rules = self
            .registry
            .get(language_id)
            .ok_or_else(|| TokenizationError::UnknownLanguage(language_id.to_owned()))?;
        tokenize_with(rules, text, &self.budget)
    }

    /// Tokenize, falling back to one plain token when classification fails.
    ///
    /// For renderers: an unknown language or an exhausted budget still shows
    /// the text, just unclassified, so the stream always covers `text`.
    /// The only error left is [`TokenizationError::InputTooLarge`], since no
    /// span can address such an input.
    pub fn tokenize_or_plain(
        &self,
        language_id: &str,
        text: &str,
    ) -> Result<TokenStream, TokenizationError> {
        match self.tokenize(language_id, text) {
            Ok(stream) => Ok(stream),
            Err(err @ TokenizationError::InputTooLarge { .. }) => Err(err),
            Err(err) => {
                tracing::warn!(language = language_id, %err, "falling back to plain text");
                TokenStream::plain(text)
                    .map_err(|_| TokenizationError::InputTooLarge { len: text.len() })
            }
        }
    }
}
