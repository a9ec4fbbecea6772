//! Valuation factor bands and result types.

use serde::{Deserialize, Serialize};

use crate::category::BusinessCategory;

/// Four-level quality band shared by location and web-presence assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityBand {
    Poor,
    Average,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentBand {
    Basic,
    Average,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSize {
    Micro,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoursBand {
    Limited,
    Standard,
    Extended,
}

/// Normalized snapshot consumed by the valuation scorer.
///
/// `category: None` means the category could not be resolved; the scorer
/// then falls back to the `default` industry row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationFactors {
    pub category: Option<BusinessCategory>,
    /// City/state text, informational only.
    pub location: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub years_in_business: Option<u32>,
    pub has_website: bool,
    pub web_presence_quality: QualityBand,
    pub location_quality: QualityBand,
    pub equipment_quality: EquipmentBand,
    pub business_size: BusinessSize,
    pub operating_hours: HoursBand,
}

impl Default for ValuationFactors {
    fn default() -> Self {
        Self {
            category: None,
            location: String::new(),
            rating: None,
            review_count: None,
            years_in_business: None,
            has_website: false,
            web_presence_quality: QualityBand::Poor,
            location_quality: QualityBand::Poor,
            equipment_quality: EquipmentBand::Average,
            business_size: BusinessSize::Micro,
            operating_hours: HoursBand::Standard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedValue {
    pub low: u64,
    pub mid: u64,
    pub high: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuationConfidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

/// One human-readable line of the valuation rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationFactor {
    pub factor: String,
    pub impact: Impact,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub estimated_value: EstimatedValue,
    pub confidence: ValuationConfidence,
    pub factors: Vec<ValuationFactor>,
    pub methodology: String,
    pub comparables: Vec<String>,
}
