//! Human-readable rationale attached to a valuation.
//!
//! Apart from a poor location, only positive notes are generated.

use signval_core::{
    BusinessCategory, EquipmentBand, Impact, QualityBand, ValuationFactor, ValuationFactors,
};

use crate::scorer::location_multiplier;

const PRIME_LOCATION_ABOVE: f64 = 1.1;
const POOR_LOCATION_BELOW: f64 = 0.9;
const REPUTATION_MIN_RATING: f64 = 4.0;
const REPUTATION_MIN_REVIEWS: u32 = 10;
const ESTABLISHED_MIN_YEARS: u32 = 5;

const FALLBACK_LABEL: &str = "Business";

fn factor(name: &str, impact: Impact, description: String) -> ValuationFactor {
    ValuationFactor {
        factor: name.to_string(),
        impact,
        description,
    }
}

#[allow(clippy::cast_possible_truncation)] // percentages of a bounded multiplier
fn percent(delta: f64) -> i64 {
    (delta * 100.0).round() as i64
}

/// Explanatory notes in fixed order, at most one per condition.
#[must_use]
pub fn explain_factors(factors: &ValuationFactors) -> Vec<ValuationFactor> {
    let mut notes = Vec::new();

    let location = location_multiplier(factors);
    if location > PRIME_LOCATION_ABOVE {
        notes.push(factor(
            "Prime Location",
            Impact::Positive,
            format!(
                "Excellent location increases value by {}%",
                percent(location - 1.0)
            ),
        ));
    } else if location < POOR_LOCATION_BELOW {
        notes.push(factor(
            "Poor Location",
            Impact::Negative,
            format!(
                "Below-average location reduces value by {}%",
                percent(1.0 - location)
            ),
        ));
    }

    if let (Some(rating), Some(reviews)) = (factors.rating, factors.review_count) {
        if rating >= REPUTATION_MIN_RATING && reviews > REPUTATION_MIN_REVIEWS {
            notes.push(factor(
                "Strong Reputation",
                Impact::Positive,
                format!("High rating ({rating}) with {reviews} reviews adds premium"),
            ));
        }
    }

    if let Some(years) = factors
        .years_in_business
        .filter(|y| *y >= ESTABLISHED_MIN_YEARS)
    {
        notes.push(factor(
            "Established Business",
            Impact::Positive,
            format!("{years} years in business demonstrates stability"),
        ));
    }

    if factors.has_website && factors.web_presence_quality == QualityBand::Excellent {
        notes.push(factor(
            "Strong Online Presence",
            Impact::Positive,
            "Professional website and digital marketing increase value".to_string(),
        ));
    }

    if factors.equipment_quality == EquipmentBand::Excellent {
        notes.push(factor(
            "Quality Equipment/Assets",
            Impact::Positive,
            "High-quality equipment and fixtures add tangible value".to_string(),
        ));
    }

    notes
}

/// Three comparable-sale lines chosen by the category label.
#[must_use]
pub fn comparables(category: Option<BusinessCategory>) -> Vec<String> {
    let label = category
        .map_or(FALLBACK_LABEL, BusinessCategory::label)
        .to_lowercase();

    if label.contains("restaurants & food") {
        return vec![
            "Local restaurants sold $40K-$120K".to_string(),
            "Food service businesses $50K-$150K".to_string(),
            "Quick service concepts premium 10-20%".to_string(),
        ];
    }
    if label.contains("retail") {
        return vec![
            "Small retail stores $30K-$80K".to_string(),
            "Specialty retail $40K-$100K".to_string(),
            "Prime location retail premium 30%".to_string(),
        ];
    }
    vec![
        format!("Similar {label} businesses in area"),
        "Local market comparables".to_string(),
        "Industry benchmark multiples".to_string(),
    ]
}

#[must_use]
pub fn methodology(industry_key: &str) -> String {
    format!(
        "Valuation based on industry multiples for {industry_key} businesses, adjusted for location quality, reputation, business age, web presence, and operational factors."
    )
}
