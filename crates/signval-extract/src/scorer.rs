//! Heuristic scoring, deduplication, and ranking of name candidates.

use std::sync::LazyLock;

use regex::Regex;
use signval_core::{NameCandidate, PipelineObserver};

/// Maximum number of business names kept after ranking.
pub const MAX_BUSINESS_NAMES: usize = 3;

/// Keyword bonuses, checked in order against the lowercase candidate.
///
/// Only the first match counts; bonuses never stack.
pub(crate) const KEYWORD_BONUSES: &[(&str, i32)] = &[
    ("food park", 8),
    ("coffee shop", 7),
    ("restaurant", 6),
    ("market", 5),
    ("center", 4),
    ("plaza", 4),
    ("cafe", 5),
    ("grill", 5),
    ("bar", 4),
];

/// Whole-candidate signage shape: uppercase letters, whitespace, `&-'.` only.
static SIGNAGE_CAPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s&\-'.]+$").expect("valid signage regex"));

/// Score a candidate name given the line index of its first word.
///
/// Components: position (`10 - index`, floored at 0), word count, leading
/// capital, all-caps signage shape, first keyword bonus, and length
/// bonus/penalties. The total floors at 0.
#[must_use]
pub fn score_name(name: &str, position: usize) -> u32 {
    let len = name.chars().count();
    let mut score: i32 = i32::try_from(10_usize.saturating_sub(position)).unwrap_or(0);

    score += match name.split(' ').count() {
        2 => 5,
        3 => 4,
        1 if len > 4 => 3,
        _ => 0,
    };

    if name.starts_with(|c: char| c.is_ascii_uppercase()) {
        score += 2;
    }
    if SIGNAGE_CAPS.is_match(name) {
        score += 3;
    }

    score += keyword_bonus(&name.to_lowercase());

    if (8..=25).contains(&len) {
        score += 3;
    }
    if len < 4 {
        score -= 3;
    }
    if len > 40 {
        score -= 5;
    }

    u32::try_from(score.max(0)).unwrap_or(0)
}

/// Bonus for the first keyword found in `lower`, or 0.
#[must_use]
pub(crate) fn keyword_bonus(lower: &str) -> i32 {
    KEYWORD_BONUSES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(0, |(_, points)| *points)
}

/// Index of the line exactly equal to the candidate's first word.
///
/// Candidates whose first word is not a line of its own are treated as
/// position 0.
#[must_use]
pub fn first_word_position(name: &str, lines: &[String]) -> usize {
    let first_word = name.split(' ').next().unwrap_or_default();
    lines
        .iter()
        .position(|line| line == first_word)
        .unwrap_or(0)
}

/// Drop every candidate that contains, or is contained by, an earlier
/// accepted candidate (case-insensitive).
///
/// Acceptance follows input order, so a short generic name accepted first
/// suppresses a longer, more specific one generated later.
#[must_use]
pub fn dedup_candidates(candidates: Vec<NameCandidate>) -> Vec<NameCandidate> {
    let mut accepted: Vec<NameCandidate> = Vec::with_capacity(candidates.len());
    let mut accepted_lower: Vec<String> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let lower = candidate.name.to_lowercase();
        let duplicate = accepted_lower
            .iter()
            .any(|existing| existing.contains(&lower) || lower.contains(existing.as_str()));
        if !duplicate {
            accepted_lower.push(lower);
            accepted.push(candidate);
        }
    }

    accepted
}

/// Score, dedup, and rank candidates; returns the top names best-first.
///
/// Sorting is stable, so tied scores keep generation order.
pub fn rank_candidates(
    mut candidates: Vec<NameCandidate>,
    lines: &[String],
    observer: &dyn PipelineObserver,
) -> Vec<String> {
    for candidate in &mut candidates {
        candidate.score = score_name(&candidate.name, first_word_position(&candidate.name, lines));
        observer.candidate_scored(candidate);
    }

    let mut unique = dedup_candidates(candidates);
    unique.sort_by(|a, b| b.score.cmp(&a.score));

    let names: Vec<String> = unique
        .into_iter()
        .take(MAX_BUSINESS_NAMES)
        .map(|c| c.name)
        .collect();
    observer.names_ranked(&names);
    names
}
