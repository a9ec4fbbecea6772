use serde::{Deserialize, Serialize};

/// Full OCR output for one image, as produced by the OCR collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTextBlock {
    pub full_text: String,
    /// Number of individually detected text tokens.
    pub detection_count: usize,
}

impl RawTextBlock {
    #[must_use]
    pub fn new(full_text: impl Into<String>, detection_count: usize) -> Self {
        Self {
            full_text: full_text.into(),
            detection_count,
        }
    }
}

/// Qualitative extraction confidence grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceLevel::Low => write!(f, "Low"),
            ConfidenceLevel::Medium => write!(f, "Medium"),
            ConfidenceLevel::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfidence {
    pub business_name: ConfidenceLevel,
    pub address: ConfidenceLevel,
    pub phone: ConfidenceLevel,
}

/// Structured identity pulled out of one storefront image.
///
/// `business_names` holds at most three entries, best first, none of which
/// is a case-insensitive substring of another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub business_names: Vec<String>,
    pub addresses: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub websites: Vec<String>,
    pub emails: Vec<String>,
    pub other_text: Vec<String>,
    pub confidence: FieldConfidence,
}

impl ExtractionResult {
    /// Highest-ranked business name, if any survived extraction.
    #[must_use]
    pub fn primary_name(&self) -> Option<&str> {
        self.business_names.first().map(String::as_str)
    }

    #[must_use]
    pub fn primary_address(&self) -> Option<&str> {
        self.addresses.first().map(String::as_str)
    }
}

/// Which generation strategy produced a name candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStrategy {
    Context,
    Positional,
    Pattern,
}

impl CandidateStrategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CandidateStrategy::Context => "context",
            CandidateStrategy::Positional => "positional",
            CandidateStrategy::Pattern => "pattern",
        }
    }
}

/// A provisional business name. Lives only between generation and ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCandidate {
    pub name: String,
    pub strategy: CandidateStrategy,
    pub score: u32,
}
