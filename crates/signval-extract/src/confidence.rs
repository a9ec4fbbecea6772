//! Extraction confidence grading.

use signval_core::{ConfidenceLevel, FieldConfidence};

const BASE_CONFIDENCE: f64 = 0.5;
const MAX_CONFIDENCE: f64 = 0.95;
const ADDRESS_FACTOR: f64 = 0.8;
const PHONE_FACTOR: f64 = 0.7;

/// Underlying scalars for the three confidence grades.
///
/// Address and phone are fixed fractions of the name scalar, so
/// `phone <= address <= name` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceScores {
    pub name: f64,
    pub address: f64,
    pub phone: f64,
}

impl ConfidenceScores {
    #[must_use]
    pub fn from_base(base: f64) -> Self {
        Self {
            name: base,
            address: base * ADDRESS_FACTOR,
            phone: base * PHONE_FACTOR,
        }
    }

    #[must_use]
    pub fn levels(&self) -> FieldConfidence {
        FieldConfidence {
            business_name: grade(self.name),
            address: grade(self.address),
            phone: grade(self.phone),
        }
    }
}

/// Aggregate signal quality into a single scalar in `[0.5, 0.95]`.
#[must_use]
pub fn base_confidence(detection_count: usize, name_count: usize, full_text: &str) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if detection_count > 5 {
        confidence += 0.1;
    }
    if detection_count > 10 {
        confidence += 0.1;
    }

    if name_count > 0 {
        confidence += 0.2;
    }
    if name_count > 1 {
        confidence += 0.1;
    }

    if full_text.split_whitespace().count() >= 5 {
        confidence += 0.1;
    }

    confidence.min(MAX_CONFIDENCE)
}

/// Map a scalar to a grade: `> 0.7` High, `> 0.5` Medium, else Low.
#[must_use]
pub fn grade(score: f64) -> ConfidenceLevel {
    if score > 0.7 {
        ConfidenceLevel::High
    } else if score > 0.5 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Convenience wrapper: scalars plus grades for one extraction.
#[must_use]
pub fn estimate_confidence(
    detection_count: usize,
    name_count: usize,
    full_text: &str,
) -> (ConfidenceScores, FieldConfidence) {
    let scores = ConfidenceScores::from_base(base_confidence(detection_count, name_count, full_text));
    (scores, scores.levels())
}
