//! Match scanner: every match of every rule over the whole text.
//!
//! Rules are scanned independently of each other. Within one rule, matches
//! never overlap (leftmost-first, like `Regex::find_iter`). Conflicts between
//! rules are left to [`merge`](crate::merge).

use lumen_ir::{Span, TokenType};
use lumen_rules::{CompiledRule, CompiledRuleSet, TypeAssignment};
use regex::CaptureLocations;

use crate::{ScanGuard, TokenizationError};

/// A candidate token produced by one rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub span: Span,
    pub ty: TokenType,
    /// Priority index of the originating rule.
    pub priority: usize,
    /// Capture group that produced this match; 0 for whole-match rules.
    pub group: usize,
}

/// Scan `text` with every rule, in priority order.
///
/// Returns one list per rule, indexed by priority. Empty matches and
/// non-participating or empty groups produce nothing.
#[tracing::instrument(level = "trace", skip_all, fields(rules = rules.len(), len = text.len()))]
pub fn scan(
    rules: &CompiledRuleSet,
    text: &str,
    guard: &mut ScanGuard,
) -> Result<Vec<Vec<Match>>, TokenizationError> {
    let mut per_rule = Vec::with_capacity(rules.len());
    for rule in rules {
        let mut matches = Vec::new();
        match rule.context() {
            None => search(rule, text, 0..text.len(), guard, &mut matches)?,
            Some(context) => {
                for region in context_regions(context, text, guard)? {
                    search(rule, text, region, guard, &mut matches)?;
                }
            }
        }
        tracing::trace!(rule = rule.label(), matches = matches.len(), "rule scanned");
        per_rule.push(matches);
    }
    Ok(per_rule)
}

/// Non-empty, non-overlapping spans of a context pattern.
fn context_regions(
    context: &regex::Regex,
    text: &str,
    guard: &mut ScanGuard,
) -> Result<Vec<std::ops::Range<usize>>, TokenizationError> {
    let mut regions = Vec::new();
    for found in context.find_iter(text) {
        guard.step()?;
        if !found.is_empty() {
            regions.push(found.range());
        }
    }
    Ok(regions)
}

/// Search `rule` inside `region`.
///
/// The haystack is cut at the region end, so matches cannot leave the region;
/// text before the region start stays visible to `\b` and `^`.
fn search(
    rule: &CompiledRule,
    text: &str,
    region: std::ops::Range<usize>,
    guard: &mut ScanGuard,
    out: &mut Vec<Match>,
) -> Result<(), TokenizationError> {
    let Some(haystack) = text.get(..region.end) else {
        return Ok(());
    };
    let regex = rule.regex();
    let mut locs = regex.capture_locations();
    let mut at = region.start;

    while at <= haystack.len() {
        guard.step()?;
        let Some(found) = regex.captures_read_at(&mut locs, haystack, at) else {
            break;
        };

        emit(rule, text, &locs, guard, out)?;

        at = if found.end() > found.start() {
            found.end()
        } else {
            // Step over one character so an empty match cannot repeat.
            match haystack[found.end()..].chars().next() {
                Some(c) => found.end() + c.len_utf8(),
                None => break,
            }
        };
    }
    Ok(())
}

fn emit(
    rule: &CompiledRule,
    text: &str,
    locs: &CaptureLocations,
    guard: &mut ScanGuard,
    out: &mut Vec<Match>,
) -> Result<(), TokenizationError> {
    let groups = match rule.assignment() {
        TypeAssignment::Whole(_) => 0..=0,
        TypeAssignment::Groups(types) => 1..=types.len(),
    };
    for group in groups {
        let Some((start, end)) = locs.get(group) else {
            continue;
        };
        if start == end {
            continue;
        }
        let Some(ty) = rule.type_of_group(group) else {
            continue;
        };
        guard.record_match()?;
        out.push(Match {
            span: to_span(text, start, end)?,
            ty: ty.clone(),
            priority: rule.priority(),
            group,
        });
    }
    Ok(())
}

fn to_span(text: &str, start: usize, end: usize) -> Result<Span, TokenizationError> {
    Span::try_from_range(start..end).map_err(|_| TokenizationError::InputTooLarge { len: text.len() })
}
