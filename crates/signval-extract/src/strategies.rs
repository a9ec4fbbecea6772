//! Name-candidate generation strategies.
//!
//! Each strategy walks windows of contiguous preprocessed lines and emits raw
//! strings. Overlaps and duplicates across strategies are expected; they are
//! collapsed during ranking.

use std::sync::LazyLock;

use regex::Regex;
use signval_core::{CandidateStrategy, NameCandidate};

/// Business-indicator word groups, checked in order. A window qualifies when
/// its lowercase text contains every word of a group.
pub(crate) const BUSINESS_INDICATORS: &[&[&str]] = &[
    &["food", "park"],
    &["coffee", "shop"],
    &["restaurant"],
    &["market"],
    &["center"],
    &["plaza"],
    &["cafe"],
    &["grill"],
    &["bar"],
];

const CONTEXT_MAX_WINDOW: usize = 4;
const CONTEXT_MAX_LEN: usize = 50;

const POSITIONAL_LINE_LIMIT: usize = 5;
const POSITIONAL_SINGLE_LEN: std::ops::RangeInclusive<usize> = 4..=15;
const POSITIONAL_PAIR_MAX_LEN: usize = 30;
const POSITIONAL_TRIPLE_MAX_LEN: usize = 40;

const PATTERN_MAX_LEN: usize = 35;

static SURFACE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("proper_case_pair", r"^[A-Z][a-z]+ [A-Z][a-z]+$"),
        ("all_caps_pair", r"^[A-Z]+ [A-Z]+$"),
        ("proper_case_triple", r"^[A-Z][a-z]+ [A-Z][a-z]+ [A-Z][a-z]+$"),
        ("all_caps_triple", r"^[A-Z]+ [A-Z]+ [A-Z]+$"),
    ]
    .into_iter()
    .map(|(label, pattern)| (label, Regex::new(pattern).expect("valid surface pattern")))
    .collect()
});

/// Run all three strategies in order (context, positional, pattern).
///
/// Returned candidates carry a zero score; see [`crate::scorer`].
#[must_use]
pub fn generate_candidates(lines: &[String]) -> Vec<NameCandidate> {
    let tagged = [
        (CandidateStrategy::Context, context_candidates(lines)),
        (CandidateStrategy::Positional, positional_candidates(lines)),
        (CandidateStrategy::Pattern, pattern_candidates(lines)),
    ];

    tagged
        .into_iter()
        .flat_map(|(strategy, names)| {
            names.into_iter().map(move |name| NameCandidate {
                name,
                strategy,
                score: 0,
            })
        })
        .collect()
}

/// First indicator group whose words all appear in `lower`.
#[must_use]
pub(crate) fn first_business_indicator(lower: &str) -> Option<&'static [&'static str]> {
    BUSINESS_INDICATORS
        .iter()
        .copied()
        .find(|words| words.iter().all(|word| lower.contains(word)))
}

/// Label of the first surface pattern matching `text`.
#[must_use]
pub(crate) fn first_surface_pattern(text: &str) -> Option<&'static str> {
    SURFACE_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(label, _)| *label)
}

/// Windows of 1–4 lines that mention a business indicator.
pub fn context_candidates(lines: &[String]) -> Vec<String> {
    let mut candidates = Vec::new();
    for start in 0..lines.len() {
        let end_max = (start + CONTEXT_MAX_WINDOW).min(lines.len());
        for end in start + 1..=end_max {
            let combined = lines[start..end].join(" ");
            if combined.chars().count() >= CONTEXT_MAX_LEN {
                continue;
            }
            if first_business_indicator(&combined.to_lowercase()).is_some() {
                candidates.push(combined);
            }
        }
    }
    candidates
}

/// Single lines and 2/3-line joins from the first five lines.
pub fn positional_candidates(lines: &[String]) -> Vec<String> {
    let mut candidates = Vec::new();
    for (i, line) in lines.iter().enumerate().take(POSITIONAL_LINE_LIMIT) {
        if POSITIONAL_SINGLE_LEN.contains(&line.chars().count()) {
            candidates.push(line.clone());
        }

        if i + 1 < lines.len() {
            let pair = lines[i..i + 2].join(" ");
            if pair.chars().count() <= POSITIONAL_PAIR_MAX_LEN {
                candidates.push(pair);
            }
        }

        if i + 2 < lines.len() {
            let triple = lines[i..i + 3].join(" ");
            if triple.chars().count() <= POSITIONAL_TRIPLE_MAX_LEN {
                candidates.push(triple);
            }
        }
    }
    candidates
}

/// 2–3 line windows shaped like a proper-case or all-caps name.
pub fn pattern_candidates(lines: &[String]) -> Vec<String> {
    let mut candidates = Vec::new();
    for start in 0..lines.len() {
        for width in 2..=3 {
            let end = start + width;
            if end > lines.len() {
                break;
            }
            let combined = lines[start..end].join(" ");
            if combined.chars().count() <= PATTERN_MAX_LEN
                && first_surface_pattern(&combined).is_some()
            {
                candidates.push(combined);
            }
        }
    }
    candidates
}
