//! Classified spans produced by the engine.
//!
//! A [`TokenStream`] is the only artifact handed to renderers. Its tokens are
//! sorted, contiguous and non-overlapping: concatenating the text of every
//! token reproduces the input exactly.

use std::fmt;
use std::sync::Arc;

use crate::{Span, SpanError};

/// Opaque classification tag, e.g. `k0` for keywords or `c1` for block comments.
///
/// The engine assigns no meaning beyond identity. Cloning is a reference-count
/// bump, so every token of a rule can share one allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TokenType(Arc<str>);

impl TokenType {
    pub fn new(tag: impl Into<Arc<str>>) -> Self {
        TokenType(tag.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TokenType {
    fn from(tag: &str) -> Self {
        TokenType::new(tag)
    }
}

impl From<String> for TokenType {
    fn from(tag: String) -> Self {
        TokenType::new(tag)
    }
}

impl PartialEq<str> for TokenType {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TokenType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A final span of the input, either classified or plain.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub span: Span,
    /// `None` marks plain text that no rule claimed.
    pub ty: Option<TokenType>,
}

impl Token {
    #[inline]
    pub fn typed(span: Span, ty: TokenType) -> Self {
        Token { span, ty: Some(ty) }
    }

    #[inline]
    pub fn plain(span: Span) -> Self {
        Token { span, ty: None }
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        self.ty.is_none()
    }

    /// Slice this token out of the text it was produced from.
    ///
    /// Returns `None` if the span does not fit `source` (i.e. the token came
    /// from a different text).
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.span.to_range())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ty {
            Some(ty) => write!(f, "{ty}@{:?}", self.span),
            None => write!(f, "plain@{:?}", self.span),
        }
    }
}

/// Ordered, gapless sequence of tokens for one input.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    #[inline]
    pub fn new() -> Self {
        TokenStream { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenStream {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// A stream holding the whole of `source` as one plain token.
    ///
    /// This is the fallback rendering for callers whose tokenize request
    /// failed. Empty text yields an empty stream.
    pub fn plain(source: &str) -> Result<Self, SpanError> {
        let mut stream = TokenStream::new();
        if !source.is_empty() {
            stream.push(Token::plain(Span::try_from_range(0..source.len())?));
        }
        Ok(stream)
    }

    /// Append a token.
    ///
    /// The token must start where the previous one ended and must not be
    /// empty; the engine upholds this, and debug builds check it.
    #[inline]
    pub fn push(&mut self, token: Token) {
        debug_assert_eq!(token.span.start, self.end(), "token stream must be gapless");
        debug_assert!(!token.span.is_empty(), "token stream must not hold empty tokens");
        self.tokens.push(token);
    }

    /// Byte offset just past the last token (0 for an empty stream).
    #[inline]
    pub fn end(&self) -> u32 {
        self.tokens.last().map_or(0, |t| t.span.end)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// Pair every token with its text.
    ///
    /// Tokens whose span does not fit `source` are paired with `""`.
    pub fn texts<'s, 'a>(
        &'s self,
        source: &'a str,
    ) -> impl Iterator<Item = (&'s Token, &'a str)> {
        self.tokens
            .iter()
            .map(move |token| (token, token.text(source).unwrap_or_default()))
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl std::ops::Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

#[cfg(test)]
mod tests;
