use super::*;
use pretty_assertions::assert_eq;

// === TokenType ===

#[test]
fn token_type_identity() {
    let a = TokenType::from("k0");
    let b = TokenType::new(String::from("k0"));
    assert_eq!(a, b);
    assert_eq!(a, "k0");
    assert_ne!(a, TokenType::from("k1"));
    assert_eq!(a.to_string(), "k0");
    assert_eq!(format!("{a:?}"), "\"k0\"");
}

// === Token ===

#[test]
fn token_text_slices_source() {
    let source = "begin end";
    let token = Token::typed(Span::new(6, 9), TokenType::from("k1"));
    assert_eq!(token.text(source), Some("end"));
    assert!(!token.is_plain());
}

#[test]
fn token_text_out_of_range_is_none() {
    let token = Token::plain(Span::new(4, 12));
    assert_eq!(token.text("short"), None);
    assert!(token.is_plain());
}

#[test]
fn token_debug_shows_type_and_span() {
    let typed = Token::typed(Span::new(0, 5), TokenType::from("k1"));
    let plain = Token::plain(Span::new(5, 6));
    assert_eq!(format!("{typed:?}"), "k1@0..5");
    assert_eq!(format!("{plain:?}"), "plain@5..6");
}

// === TokenStream ===

#[test]
fn plain_stream_covers_source() {
    let source = "writeln('x');";
    let Ok(stream) = TokenStream::plain(source) else {
        panic!("plain stream for short input must succeed");
    };
    assert_eq!(stream.len(), 1);
    assert_eq!(stream[0], Token::plain(Span::new(0, 13)));
    assert_eq!(stream.end(), 13);
}

#[test]
fn plain_stream_of_empty_source_is_empty() {
    let Ok(stream) = TokenStream::plain("") else {
        panic!("plain stream for empty input must succeed");
    };
    assert!(stream.is_empty());
    assert_eq!(stream.end(), 0);
}

#[test]
fn push_and_texts() {
    let source = "if x";
    let mut stream = TokenStream::with_capacity(3);
    stream.push(Token::typed(Span::new(0, 2), TokenType::from("k1")));
    stream.push(Token::plain(Span::new(2, 4)));

    let texts: Vec<&str> = stream.texts(source).map(|(_, text)| text).collect();
    assert_eq!(texts, vec!["if", " x"]);
    assert_eq!(stream.end(), 4);

    let types: Vec<Option<&str>> = stream
        .iter()
        .map(|t| t.ty.as_ref().map(TokenType::as_str))
        .collect();
    assert_eq!(types, vec![Some("k1"), None]);
}

#[test]
#[should_panic(expected = "gapless")]
#[cfg(debug_assertions)]
fn push_with_gap_panics_in_debug() {
    let mut stream = TokenStream::new();
    stream.push(Token::plain(Span::new(1, 2)));
}

#[test]
fn into_vec_preserves_order() {
    let mut stream = TokenStream::new();
    stream.push(Token::plain(Span::new(0, 1)));
    stream.push(Token::typed(Span::new(1, 3), TokenType::from("s0")));
    let spans: Vec<Span> = stream.into_vec().into_iter().map(|t| t.span).collect();
    assert_eq!(spans, vec![Span::new(0, 1), Span::new(1, 3)]);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_token_types_as_plain_strings() {
    let mut stream = TokenStream::new();
    stream.push(Token::typed(Span::new(0, 3), TokenType::from("k0")));
    stream.push(Token::plain(Span::new(3, 4)));

    let Ok(json) = serde_json::to_string(&stream) else {
        panic!("token stream must serialize");
    };
    assert_eq!(
        json,
        r#"{"tokens":[{"span":{"start":0,"end":3},"ty":"k0"},{"span":{"start":3,"end":4},"ty":null}]}"#
    );
    let Ok(back) = serde_json::from_str::<TokenStream>(&json) else {
        panic!("token stream must deserialize");
    };
    assert_eq!(back, stream);
}
