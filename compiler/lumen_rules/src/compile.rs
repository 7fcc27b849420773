//! Rule compiler: authored rule list to executable rule set.
//!
//! Compilation happens once per language. It flattens fragment references,
//! checks group arity, builds every regex and numbers the rules by their
//! final position. The result is immutable and can be shared across threads.

use std::sync::Arc;

use lumen_ir::TokenType;
use regex::{Regex, RegexBuilder};

use crate::{
    FragmentLibrary, PatternFlags, RegistrationError, RuleDescriptor, RuleEntry, TypeAssignment,
};

/// Limits applied while building each pattern.
///
/// Bounds the memory a hostile or careless rule table can claim.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Maximum size of one compiled regex program, in bytes.
    pub size_limit: usize,
    /// Maximum size of the lazy DFA cache per regex, in bytes.
    pub dfa_size_limit: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            size_limit: 10 * (1 << 20),
            dfa_size_limit: 2 * (1 << 20),
        }
    }
}

/// A validated, compiled rule.
#[derive(Clone, Debug)]
pub struct CompiledRule {
    priority: usize,
    regex: Regex,
    context: Option<Regex>,
    assignment: TypeAssignment,
    name: Option<Arc<str>>,
}

impl CompiledRule {
    /// Position in the flattened rule list; lower wins conflicts.
    #[inline]
    pub fn priority(&self) -> usize {
        self.priority
    }

    #[inline]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Pattern confining this rule's matches, if any.
    #[inline]
    pub fn context(&self) -> Option<&Regex> {
        self.context.as_ref()
    }

    #[inline]
    pub fn assignment(&self) -> &TypeAssignment {
        &self.assignment
    }

    /// Type of capture group `group` (1-based), or of the whole match for
    /// group 0 of a whole-match rule.
    pub fn type_of_group(&self, group: usize) -> Option<&TokenType> {
        match &self.assignment {
            TypeAssignment::Whole(ty) => (group == 0).then_some(ty),
            TypeAssignment::Groups(types) => group.checked_sub(1).and_then(|i| types.get(i)),
        }
    }

    /// Label for logs: the rule's name, or its pattern.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.regex.as_str())
    }
}

/// Ordered, immutable rules of one language. Index 0 is highest priority.
#[derive(Clone, Debug, Default)]
pub struct CompiledRuleSet {
    rules: Vec<CompiledRule>,
}

impl CompiledRuleSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }

    #[inline]
    pub fn get(&self, priority: usize) -> Option<&CompiledRule> {
        self.rules.get(priority)
    }
}

impl<'a> IntoIterator for &'a CompiledRuleSet {
    type Item = &'a CompiledRule;
    type IntoIter = std::slice::Iter<'a, CompiledRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Compile an authored rule list.
///
/// Fails closed: the first invalid rule aborts compilation and nothing is
/// returned for the rest of the list.
#[tracing::instrument(level = "debug", skip_all, fields(entries = entries.len()))]
pub fn compile(
    entries: &[RuleEntry],
    fragments: &dyn FragmentLibrary,
    options: &CompileOptions,
) -> Result<CompiledRuleSet, RegistrationError> {
    let flattened = flatten(entries, fragments)?;

    let mut rules = Vec::with_capacity(flattened.len());
    for (index, descriptor) in flattened.into_iter().enumerate() {
        rules.push(compile_rule(index, descriptor, options)?);
    }

    tracing::debug!(rules = rules.len(), "rule set compiled");
    Ok(CompiledRuleSet { rules })
}

/// Expand fragment references in place, preserving relative order.
fn flatten<'a>(
    entries: &'a [RuleEntry],
    fragments: &'a dyn FragmentLibrary,
) -> Result<Vec<&'a RuleDescriptor>, RegistrationError> {
    let mut flattened = Vec::with_capacity(entries.len());
    for (entry, item) in entries.iter().enumerate() {
        match item {
            RuleEntry::Rule(rule) => flattened.push(rule),
            RuleEntry::Fragment(name) => {
                let rules =
                    fragments
                        .resolve(name)
                        .ok_or_else(|| RegistrationError::UnknownFragment {
                            entry,
                            name: name.to_string(),
                        })?;
                tracing::trace!(fragment = %name, rules = rules.len(), "fragment expanded");
                flattened.extend(rules);
            }
        }
    }
    Ok(flattened)
}

fn compile_rule(
    index: usize,
    descriptor: &RuleDescriptor,
    options: &CompileOptions,
) -> Result<CompiledRule, RegistrationError> {
    let flags = descriptor.flags();
    let regex = build_regex(index, descriptor.pattern(), flags, options)?;

    if let TypeAssignment::Groups(types) = descriptor.assignment() {
        // captures_len counts the implicit whole-match group 0
        let groups = regex.captures_len() - 1;
        if types.len() != groups {
            return Err(RegistrationError::GroupArityMismatch {
                index,
                types: types.len(),
                groups,
            });
        }
    }

    let context = descriptor
        .context()
        .map(|pattern| build_regex(index, pattern, flags, options))
        .transpose()?;

    Ok(CompiledRule {
        priority: index,
        regex,
        context,
        assignment: descriptor.assignment().clone(),
        name: descriptor.name().map(Arc::from),
    })
}

fn build_regex(
    index: usize,
    pattern: &str,
    flags: PatternFlags,
    options: &CompileOptions,
) -> Result<Regex, RegistrationError> {
    RegexBuilder::new(pattern)
        .case_insensitive(flags.ignore_case)
        .multi_line(flags.multi_line)
        .size_limit(options.size_limit)
        .dfa_size_limit(options.dfa_size_limit)
        .build()
        .map_err(|err| RegistrationError::InvalidPattern {
            index,
            pattern: pattern.to_owned(),
            message: err.to_string(),
        })
}
