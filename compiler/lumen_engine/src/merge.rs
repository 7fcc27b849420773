//! Conflict resolver: per-rule matches to one gapless token stream.
//!
//! # Policy
//!
//! Matches are visited by start offset. Among matches starting at the same
//! offset, the rule declared first (lowest priority index) wins; length never
//! decides between rules. The winner is taken whole, and every other match
//! overlapping it is dropped, not trimmed. Uncovered ranges become plain
//! tokens.
//!
//! Within one rule, nested capture groups can start at the same offset. Those
//! ties go to the longer match, then to the lower group index.

use std::cmp::Reverse;

use lumen_ir::{Span, Token, TokenStream};

use crate::Match;

/// Resolve conflicts and fill gaps.
///
/// `text_len` is the length of the scanned text; the returned stream covers
/// `0..text_len` exactly.
pub fn merge(per_rule: Vec<Vec<Match>>, text_len: u32) -> TokenStream {
    let mut candidates: Vec<Match> = per_rule.into_iter().flatten().collect();
    candidates.sort_unstable_by_key(|m| (m.span.start, m.priority, Reverse(m.span.end), m.group));

    let mut stream = TokenStream::with_capacity(candidates.len() * 2 + 1);
    let mut cursor = 0;
    let mut last_winner: Option<Span> = None;

    for candidate in candidates {
        debug_assert!(!candidate.span.is_empty(), "scanner emitted an empty match");
        if candidate.span.start < cursor || candidate.span.end > text_len {
            continue;
        }
        debug_assert!(
            !last_winner.is_some_and(|last| last.overlaps(candidate.span)),
            "accepted match overlaps the previous winner"
        );
        if candidate.span.start > cursor {
            stream.push(Token::plain(Span::new(cursor, candidate.span.start)));
        }
        cursor = candidate.span.end;
        last_winner = Some(candidate.span);
        stream.push(Token::typed(candidate.span, candidate.ty));
    }

    if cursor < text_len {
        stream.push(Token::plain(Span::new(cursor, text_len)));
    }
    stream
}

#[cfg(test)]
mod tests;
