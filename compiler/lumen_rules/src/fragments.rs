//! Reusable rule fragments shared across languages.
//!
//! A fragment is a named, ordered list of [`RuleDescriptor`]s. Language tables
//! reference fragments with [`RuleEntry::Fragment`](crate::RuleEntry::Fragment)
//! and the compiler splices them in place.
//!
//! [`FragmentSet::common`] carries the generic building blocks: quoted
//! strings, calls, booleans, comments and numeric literals.

use rustc_hash::FxHashMap;

use crate::RuleDescriptor;

/// Lookup of fragments by name.
pub trait FragmentLibrary {
    /// The rules a fragment expands to, or `None` if the name is unknown.
    fn resolve(&self, name: &str) -> Option<&[RuleDescriptor]>;
}

/// Library with no fragments; every reference fails to resolve.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoFragments;

impl FragmentLibrary for NoFragments {
    fn resolve(&self, _name: &str) -> Option<&[RuleDescriptor]> {
        None
    }
}

/// Map-backed fragment library.
#[derive(Clone, Debug, Default)]
pub struct FragmentSet {
    fragments: FxHashMap<String, Vec<RuleDescriptor>>,
}

impl FragmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generic fragments every bundled language draws from.
    pub fn common() -> Self {
        let mut set = Self::new();

        set.insert(
            "dq_strings",
            vec![RuleDescriptor::new(r#""(?:[^"\\]|\\.)*""#, "s0").named("double-quoted string")],
        );
        // Backslash escapes; Pascal's doubled quote splits into two adjacent
        // string tokens, which renders the same.
        set.insert(
            "sq_strings",
            vec![RuleDescriptor::new(r"'(?:[^'\\]|\\.)*'", "s0").named("single-quoted string")],
        );

        set.insert(
            "prop",
            vec![RuleDescriptor::groups(r"[\w\])]\.(\w+)\b", ["m3"]).named("property access")],
        );
        set.insert(
            "f_calls",
            vec![RuleDescriptor::groups(r"\b(\w+)\s*\(", ["m0"]).named("function call")],
        );
        set.insert(
            "m_calls",
            vec![RuleDescriptor::groups(r"\.(\w+)\s*\(", ["m1"]).named("method call")],
        );

        set.insert(
            "boolean",
            vec![RuleDescriptor::new(r"\b(?:true|false)\b", "e0")
                .ignore_case()
                .named("boolean")],
        );
        set.insert(
            "null",
            vec![RuleDescriptor::new(r"\bnull\b", "e1").ignore_case().named("null")],
        );

        set.insert(
            "slash_comments",
            vec![RuleDescriptor::groups(r"(?:^|[^\\])(//.*)$", ["c0"])
                .multi_line()
                .named("line comment")],
        );
        set.insert(
            "block_comments",
            vec![RuleDescriptor::new(r"/\*[\s\S]*?\*/", "c1").named("block comment")],
        );

        let floats = RuleDescriptor::new(
            r"\b(?:\d+\.\d+(?:e[-+]?\d+)?|\d+e[-+]?\d+)\b",
            "n1",
        )
        .ignore_case()
        .named("float");
        let hex = RuleDescriptor::new(r"\b0x[0-9a-f]+\b", "n5").ignore_case().named("hex");
        let bin = RuleDescriptor::new(r"\b0b[01]+\b", "n2").ignore_case().named("binary");
        let octal = RuleDescriptor::new(r"\b0o[0-7]+\b", "n3").ignore_case().named("octal");
        let int = RuleDescriptor::new(r"\b\d+\b", "n0").named("integer");

        set.insert("floats", vec![floats.clone()]);
        set.insert("hex", vec![hex.clone()]);
        set.insert("bin", vec![bin.clone()]);
        set.insert("octal", vec![octal.clone()]);
        set.insert("int", vec![int.clone()]);
        // Prefixed and fractional forms first: at a shared start offset the
        // earlier rule wins, so `int` would otherwise claim the leading digits.
        set.insert("numbers", vec![floats, hex, bin, octal, int]);

        set
    }

    /// Add or replace a fragment.
    pub fn insert(&mut self, name: impl Into<String>, rules: Vec<RuleDescriptor>) {
        self.fragments.insert(name.into(), rules);
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, rules: Vec<RuleDescriptor>) -> Self {
        self.insert(name, rules);
        self
    }

    /// Fragment names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fragments.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl FragmentLibrary for FragmentSet {
    fn resolve(&self, name: &str) -> Option<&[RuleDescriptor]> {
        self.fragments.get(name).map(Vec::as_slice)
    }
}
