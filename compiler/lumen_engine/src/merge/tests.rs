use super::*;
use lumen_ir::TokenType;
use pretty_assertions::assert_eq;

fn m(start: u32, end: u32, ty: &str, priority: usize) -> Match {
    Match {
        span: Span::new(start, end),
        ty: TokenType::from(ty),
        priority,
        group: 0,
    }
}

/// `(start, end, type)` with `"-"` for plain tokens.
fn layout(stream: &TokenStream) -> Vec<(u32, u32, String)> {
    stream
        .iter()
        .map(|t| {
            let ty = t.ty.as_ref().map_or_else(|| "-".to_owned(), ToString::to_string);
            (t.span.start, t.span.end, ty)
        })
        .collect()
}

#[test]
fn no_matches_yields_single_plain_token() {
    let stream = merge(vec![Vec::new(), Vec::new()], 5);
    assert_eq!(layout(&stream), vec![(0, 5, "-".into())]);
}

#[test]
fn empty_text_yields_empty_stream() {
    assert!(merge(Vec::new(), 0).is_empty());
}

#[test]
fn gaps_become_plain_tokens() {
    let stream = merge(vec![vec![m(2, 4, "k", 0), m(6, 7, "k", 0)]], 9);
    assert_eq!(
        layout(&stream),
        vec![
            (0, 2, "-".into()),
            (2, 4, "k".into()),
            (4, 6, "-".into()),
            (6, 7, "k".into()),
            (7, 9, "-".into()),
        ]
    );
}

#[test]
fn earlier_rule_wins_at_same_start_regardless_of_length() {
    // Rule 1 is longer but declared later.
    let stream = merge(vec![vec![m(0, 2, "short", 0)], vec![m(0, 8, "long", 1)]], 8);
    assert_eq!(layout(&stream), vec![(0, 2, "short".into()), (2, 8, "-".into())]);

    // Same pair with priorities swapped.
    let stream = merge(vec![vec![m(0, 8, "long", 0)], vec![m(0, 2, "short", 1)]], 8);
    assert_eq!(layout(&stream), vec![(0, 8, "long".into())]);
}

#[test]
fn overlapping_matches_are_discarded_not_truncated() {
    // The comment starts first, so the keyword inside it is dropped even
    // though its rule has higher priority.
    let stream = merge(
        vec![vec![m(3, 8, "keyword", 0)], vec![m(0, 12, "comment", 1)]],
        12,
    );
    assert_eq!(layout(&stream), vec![(0, 12, "comment".into())]);

    // A later match that straddles the accepted end is dropped entirely;
    // the remainder stays plain.
    let stream = merge(vec![vec![m(0, 4, "a", 0)], vec![m(2, 6, "b", 1)]], 6);
    assert_eq!(layout(&stream), vec![(0, 4, "a".into()), (4, 6, "-".into())]);
}

#[test]
fn lower_start_beats_higher_priority() {
    let stream = merge(vec![vec![m(1, 3, "first", 0)], vec![m(0, 2, "second", 1)]], 3);
    assert_eq!(layout(&stream), vec![(0, 2, "second".into()), (2, 3, "-".into())]);
}

#[test]
fn intra_rule_ties_prefer_longer_then_lower_group() {
    let outer = Match {
        group: 1,
        ..m(0, 5, "outer", 0)
    };
    let inner = Match {
        group: 2,
        ..m(0, 2, "inner", 0)
    };
    let stream = merge(vec![vec![inner, outer]], 5);
    assert_eq!(layout(&stream), vec![(0, 5, "outer".into())]);
}

#[test]
fn input_order_does_not_matter() {
    let a = vec![vec![m(0, 3, "x", 0), m(5, 6, "x", 0)], vec![m(2, 5, "y", 1)]];
    let b = vec![vec![m(2, 5, "y", 1)], vec![m(5, 6, "x", 0), m(0, 3, "x", 0)]];
    assert_eq!(merge(a, 7), merge(b, 7));
}

#[test]
fn adjacent_matches_leave_no_gap() {
    let stream = merge(vec![vec![m(0, 2, "a", 0), m(2, 4, "a", 0)]], 4);
    assert_eq!(layout(&stream), vec![(0, 2, "a".into()), (2, 4, "a".into())]);
}

#[test]
fn accepted_tokens_never_overlap_each_other() {
    // Staggered candidates where every rule overlaps its neighbours.
    let per_rule = vec![
        vec![m(0, 5, "a", 0), m(9, 14, "a", 0)],
        vec![m(3, 10, "b", 1), m(13, 20, "b", 1)],
        vec![m(4, 6, "c", 2), m(12, 18, "c", 2), m(19, 20, "c", 2)],
    ];
    let stream = merge(per_rule, 20);

    let tokens = stream.as_slice();
    for (i, a) in tokens.iter().enumerate() {
        for b in &tokens[i + 1..] {
            assert!(!a.span.overlaps(b.span), "{a:?} overlaps {b:?}");
        }
    }
    assert_eq!(
        layout(&stream),
        vec![
            (0, 5, "a".into()),
            (5, 9, "-".into()),
            (9, 14, "a".into()),
            (14, 19, "-".into()),
            (19, 20, "c".into()),
        ]
    );
}
