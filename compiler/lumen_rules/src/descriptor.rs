//! Declarative rule descriptors.
//!
//! A [`RuleDescriptor`] pairs a pattern with a type assignment. Descriptors are
//! plain values: language plugins build them in a function and hand the list
//! to the compiler, nothing is registered as a side effect.

use std::borrow::Cow;

use lumen_ir::TokenType;

/// How a rule's matches are classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeAssignment {
    /// The whole match receives this type.
    Whole(TokenType),
    /// One type per capturing group, left to right. Text outside the groups
    /// receives no type from this rule.
    Groups(Vec<TokenType>),
}

/// Regex flags applied to a rule's pattern and to its context pattern.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PatternFlags {
    /// Letters match regardless of case (`(?i)`).
    pub ignore_case: bool,
    /// `^` and `$` match at line boundaries (`(?m)`).
    pub multi_line: bool,
}

/// A pattern with its token-type assignment.
///
/// # Example
///
/// ```text
/// RuleDescriptor::new(r"\b(begin|end)\b", "k1").ignore_case()
/// RuleDescriptor::groups(r"^\s*(unit)\s+([\w.]+)\s*;", ["k0", "k10"]).multi_line()
/// RuleDescriptor::new(r"\b(index)\b", "k4").within(r"\bproperty\b[^;]*").ignore_case()
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleDescriptor {
    pattern: Cow<'static, str>,
    assignment: TypeAssignment,
    context: Option<Cow<'static, str>>,
    flags: PatternFlags,
    name: Option<Cow<'static, str>>,
}

impl RuleDescriptor {
    /// Rule classifying every whole match as `ty`.
    pub fn new(pattern: impl Into<Cow<'static, str>>, ty: impl Into<TokenType>) -> Self {
        Self::with_assignment(pattern, TypeAssignment::Whole(ty.into()))
    }

    /// Rule classifying each capturing group with its own type.
    pub fn groups<T>(pattern: impl Into<Cow<'static, str>>, types: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<TokenType>,
    {
        let types = types.into_iter().map(Into::into).collect();
        Self::with_assignment(pattern, TypeAssignment::Groups(types))
    }

    pub fn with_assignment(
        pattern: impl Into<Cow<'static, str>>,
        assignment: TypeAssignment,
    ) -> Self {
        RuleDescriptor {
            pattern: pattern.into(),
            assignment,
            context: None,
            flags: PatternFlags::default(),
            name: None,
        }
    }

    /// Only match inside spans of `context`.
    ///
    /// The context pattern is searched first, non-overlapping, over the whole
    /// text; this rule's pattern is then searched inside each context span.
    #[must_use]
    pub fn within(mut self, context: impl Into<Cow<'static, str>>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn ignore_case(mut self) -> Self {
        self.flags.ignore_case = true;
        self
    }

    #[must_use]
    pub fn multi_line(mut self) -> Self {
        self.flags.multi_line = true;
        self
    }

    /// Human-readable label used in logs.
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn assignment(&self) -> &TypeAssignment {
        &self.assignment
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// One element of an authored rule list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleEntry {
    Rule(RuleDescriptor),
    /// Reference to a named fragment, expanded in place at compile time.
    Fragment(Cow<'static, str>),
}

impl RuleEntry {
    pub fn fragment(name: impl Into<Cow<'static, str>>) -> Self {
        RuleEntry::Fragment(name.into())
    }
}

impl From<RuleDescriptor> for RuleEntry {
    fn from(rule: RuleDescriptor) -> Self {
        RuleEntry::Rule(rule)
    }
}
