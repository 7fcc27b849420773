//! Rule model and rule compiler for the Lumen highlighting engine.
//!
//! A language is described by an ordered list of [`RuleEntry`] values: either
//! directly authored [`RuleDescriptor`]s or references to named fragments in a
//! [`FragmentLibrary`]. [`compile`] flattens the list, validates it and
//! pre-compiles every pattern into an immutable [`CompiledRuleSet`].
//!
//! # Priority
//!
//! Order is priority. The rule at flattened index 0 wins every conflict with
//! the rules after it; fragments expand in place. Authors put specific rules
//! (a compiler directive `{$...}`) ahead of general ones (a `{...}` comment).
//!
//! # Context Rules
//!
//! Lookaround is not available in the `regex` crate. A rule that should only
//! apply inside some enclosing construct names that construct with
//! [`RuleDescriptor::within`]; the scanner finds the construct first and then
//! searches the rule's own pattern inside it.

mod compile;
mod descriptor;
mod errors;
mod fragments;

pub use compile::{compile, CompileOptions, CompiledRule, CompiledRuleSet};
pub use descriptor::{PatternFlags, RuleDescriptor, RuleEntry, TypeAssignment};
pub use errors::RegistrationError;
pub use fragments::{FragmentLibrary, FragmentSet, NoFragments};
