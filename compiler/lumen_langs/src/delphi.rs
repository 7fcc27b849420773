//! Delphi / Object Pascal.
//!
//! Entries are in priority order: at any offset the first rule that matches
//! there wins, whatever the length of later matches. Keywords and types are
//! case-insensitive like the language itself.
//!
//! Several words are keywords only in a surrounding construct (`index` in a
//! `property` declaration, `name` in an `exports` clause, `const`/`var`/`out`
//! in a parameter list, unit names after `uses`). Those rules are confined to
//! the spans of a context pattern with [`RuleDescriptor::within`].

use lumen_rules::{RuleDescriptor, RuleEntry};

/// Registry id of the Delphi rule table.
pub const ID: &str = "delphi";

/// Word-bounded, case-insensitive alternation of `words`.
fn keywords(words: &'static [&'static str], ty: &'static str) -> RuleEntry {
    let pattern = format!(r"\b(?:{})\b", words.join("|"));
    RuleDescriptor::new(pattern, ty).ignore_case().into()
}

const DECLARATIONS: &[&str] = &[
    "array",
    "class",
    "constructor",
    "destructor",
    "dispinterface",
    "exports",
    "file",
    "finalization",
    "function",
    "implementation",
    "initialization",
    "inline",
    "interface",
    "library",
    "object",
    "of",
    "packed",
    "procedure",
    "program",
    "property",
    "record",
    "set",
    "unit",
    "uses",
];

// Only keywords inside class and record declarations, but never identifiers
// in practice.
const VISIBILITY: &[&str] = &["automated", "private", "protected", "public", "published"];

const CONTROL: &[&str] = &[
    "asm", "begin", "case", "do", "downto", "else", "end", "except", "finally", "for", "goto",
    "if", "raise", "repeat", "then", "to", "try", "until", "while", "with",
];

const DEFINITIONS: &[&str] = &["const", "resourcestring", "type", "threadvar", "var"];

const OPERATORS: &[&str] = &[
    "and", "as", "div", "in", "is", "mod", "not", "or", "shl", "shr", "xor",
];

const DIRECTIVES: &[&str] = &[
    "absolute",
    "abstract",
    "assembler",
    "cdecl",
    "contains",
    "default",
    "delayed",
    "deprecated",
    "dispid",
    "dynamic",
    "experimental",
    "export",
    "external",
    "final",
    "forward",
    "helper",
    "implements",
    "inline",
    "library",
    "local",
    "message",
    "nodefault",
    "operator",
    "overload",
    "override",
    "package",
    "pascal",
    "platform",
    "read",
    "readonly",
    "reference",
    "register",
    "reintroduce",
    "requires",
    "safecall",
    "sealed",
    "static",
    "stdcall",
    "stored",
    "strict",
    "unsafe",
    "varargs",
    "virtual",
    "winapi",
    "write",
    "writeonly",
];

const INTEGER_TYPES: &[&str] = &[
    "byte",
    "cardinal",
    "fixedint",
    "fixeduint",
    "int8",
    "int16",
    "int32",
    "int64",
    "integer",
    "longint",
    "longword",
    "nativeint",
    "nativeuint",
    "shortint",
    "smallint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "word",
];

const STRING_TYPES: &[&str] = &[
    "ansichar",
    "ansistring",
    "char",
    "ucs2char",
    "ucs4char",
    "shortstring",
    "string",
    "unicodestring",
    "widechar",
    "widestring",
];

const BOOLEAN_TYPES: &[&str] = &["boolean", "bytebool", "longbool", "wordbool"];

const REAL_TYPES: &[&str] = &["comp", "currency", "double", "extended", "real", "real48", "single"];

/// The Delphi rule table.
pub fn rules() -> Vec<RuleEntry> {
    vec![
        // 'it''s' is one string; there are no backslash escapes.
        RuleDescriptor::new(r"'(?:[^'\n]|'')*'", "s0")
            .named("string")
            .into(),
        // Control strings: #13#10, #$0D#$0A
        RuleDescriptor::new(r"#\$[0-9a-f]+|#[0-9]+", "s0")
            .ignore_case()
            .named("control string")
            .into(),
        // Ahead of `prop` so `Obj.Free()` is a call, not a property.
        RuleEntry::fragment("m_calls"),
        RuleEntry::fragment("prop"),
        keywords(DECLARATIONS, "k0"),
        keywords(VISIBILITY, "k0"),
        // uses A, B.C, D; anywhere, including after `interface` or
        // `program P;` on the same line.
        RuleDescriptor::groups(
            r"(?:\b(uses)\s+|\b)([\w.]+)\s*(?:,\s*|;)",
            ["k0", "k10"],
        )
        .within(r"\buses\b[^;]*;")
        .ignore_case()
        .named("uses clause")
        .into(),
        RuleDescriptor::groups(r"^\s*(library|program|unit)\s+([\w.]+)\s*;", ["k0", "k10"])
            .ignore_case()
            .multi_line()
            .named("module header")
            .into(),
        keywords(CONTROL, "k1"),
        // Parameter qualifiers; ahead of the definition keywords so `const`
        // and `var` in a parameter list are not read as section starts.
        RuleDescriptor::new(r"\b(?:const|var|out)\b", "k8")
            .within(r"\([^)]*\)")
            .ignore_case()
            .named("parameter qualifier")
            .into(),
        keywords(DEFINITIONS, "k2"),
        keywords(OPERATORS, "k3"),
        keywords(DIRECTIVES, "k4"),
        RuleDescriptor::new(r"\bindex\b", "k4")
            .within(r"\bproperty\b[^;]*")
            .ignore_case()
            .named("property index")
            .into(),
        RuleDescriptor::new(r"\bname\b", "k4")
            .within(r"\bexports\b[^;]*")
            .ignore_case()
            .named("exports name")
            .into(),
        keywords(INTEGER_TYPES, "k5"),
        keywords(STRING_TYPES, "k5"),
        keywords(BOOLEAN_TYPES, "k5"),
        keywords(REAL_TYPES, "k5"),
        keywords(&["label"], "k6"),
        keywords(&["inherited", "self"], "k9"),
        RuleEntry::fragment("f_calls"),
        RuleEntry::fragment("boolean"),
        RuleDescriptor::new(r"\bnil\b", "e1")
            .ignore_case()
            .named("nil")
            .into(),
        // {$IFDEF DEBUG}; must precede the brace comment.
        RuleDescriptor::new(r"\{\$[\s\S]*?\}", "e4")
            .named("compiler directive")
            .into(),
        // Also covers `///` doc comments, which share the c0 type.
        RuleEntry::fragment("slash_comments"),
        RuleDescriptor::new(r"\{[\s\S]*?\}|\(\*[\s\S]*?\*\)", "c1")
            .named("block comment")
            .into(),
        RuleEntry::fragment("numbers"),
        RuleDescriptor::new(r"\$[0-9a-f]+\b", "n5")
            .ignore_case()
            .named("hex literal")
            .into(),
        // Braces are comments, not brackets.
        RuleDescriptor::new(r"[\[\]()<>]+", "g1")
            .named("brackets")
            .into(),
    ]
}
