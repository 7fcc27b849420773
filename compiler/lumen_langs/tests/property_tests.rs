//! Property-based tests for the bundled Delphi table.
//!
//! Random Pascal-ish text is tokenized and checked for:
//! 1. Coverage: the token texts concatenate back to the input
//! 2. Ordering: spans are non-empty, contiguous and increasing
//! 3. Determinism: repeated and concurrent calls agree

#![allow(
    clippy::disallowed_types,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::sync::OnceLock;

use lumen_engine::{EngineConfig, Highlighter, ScanBudget};
use lumen_ir::TokenStream;
use lumen_langs::{builtin_highlighter, delphi};
use proptest::prelude::*;
use rayon::prelude::*;

fn highlighter() -> &'static Highlighter {
    static HIGHLIGHTER: OnceLock<Highlighter> = OnceLock::new();
    HIGHLIGHTER.get_or_init(|| {
        let config = EngineConfig {
            budget: ScanBudget::UNLIMITED,
            ..EngineConfig::default()
        };
        match builtin_highlighter(&config) {
            Ok(hl) => hl,
            Err(err) => panic!("bundled languages must register: {err}"),
        }
    })
}

fn tokenize(text: &str) -> TokenStream {
    match highlighter().tokenize(delphi::ID, text) {
        Ok(stream) => stream,
        Err(err) => panic!("tokenize failed for {text:?}: {err}"),
    }
}

// -- Generation Strategies --

/// One lexical piece: words, literals, comments and punctuation that the
/// Delphi rules care about, plus arbitrary filler.
fn piece_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "begin", "END", "uses", "property", "index", "exports", "name", "const", "var",
            "out", "nil", "True", "Self", "inherited", "Integer", "string",
        ])
        .prop_map(str::to_owned),
        "[A-Za-z_][A-Za-z0-9_]{0,8}",
        "[0-9]{1,4}(\\.[0-9]{1,3})?",
        "\\$[0-9A-F]{1,4}",
        "#[0-9]{1,3}",
        "'[a-z ']{0,6}'",
        "\\{\\$?[A-Z ]{0,8}\\}",
        "\\(\\*[a-z ]{0,6}\\*\\)",
        "//[a-z ]{0,8}\n",
        prop::sample::select(vec![
            " ", "\n", ";", ",", ".", ":=", "(", ")", "[", "]", "<", ">", "{", "}", "'", "é",
        ])
        .prop_map(str::to_owned),
    ]
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(piece_strategy(), 0..40).prop_map(|pieces| pieces.concat())
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn coverage(text in source_strategy()) {
        let stream = tokenize(&text);
        let rebuilt: String = stream.texts(&text).map(|(_, slice)| slice).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn spans_are_contiguous_and_non_empty(text in source_strategy()) {
        let stream = tokenize(&text);
        let mut cursor = 0u32;
        for token in &stream {
            prop_assert_eq!(token.span.start, cursor);
            prop_assert!(token.span.end > token.span.start);
            prop_assert!(text.is_char_boundary(token.span.end as usize));
            cursor = token.span.end;
        }
        prop_assert_eq!(cursor as usize, text.len());
    }

    #[test]
    fn determinism(text in source_strategy()) {
        prop_assert_eq!(tokenize(&text), tokenize(&text));
    }
}

#[test]
fn parallel_calls_match_sequential_calls() {
    let inputs: Vec<String> = (0..64)
        .map(|i| {
            format!(
                "unit U{i};\nuses A{i}, B.C;\nconst X = ${i:X}; {{ c{i} }}\nbegin WriteLn('{i}'); end."
            )
        })
        .collect();

    let sequential: Vec<TokenStream> = inputs.iter().map(|text| tokenize(text)).collect();
    let parallel: Vec<TokenStream> = inputs.par_iter().map(|text| tokenize(text)).collect();

    assert_eq!(sequential, parallel);
}
