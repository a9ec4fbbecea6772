//! Deterministic valuation: industry base value folded through an ordered
//! chain of multipliers.

use signval_core::{
    BusinessCategory, BusinessSize, EquipmentBand, EstimatedValue, HoursBand, PipelineObserver,
    QualityBand, ValuationConfidence, ValuationFactors, ValuationResult, DEFAULT_INDUSTRY_KEY,
};

use crate::explain::{comparables, explain_factors, methodology};

/// One row of the fixed industry table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryProfile {
    pub key: &'static str,
    pub base_value: f64,
    /// Typical sale multiple for the industry. Reported, not applied.
    pub base_multiplier: f64,
}

const fn row(key: &'static str, base_value: f64, base_multiplier: f64) -> IndustryProfile {
    IndustryProfile {
        key,
        base_value,
        base_multiplier,
    }
}

const DEFAULT_INDUSTRY: IndustryProfile = row(DEFAULT_INDUSTRY_KEY, 60_000.0, 0.9);

const INDUSTRY_TABLE: &[IndustryProfile] = &[
    row("agriculture", 120_000.0, 1.2),
    row("automotive_boat", 85_000.0, 1.0),
    row("beauty_personal_care", 45_000.0, 0.9),
    row("building_construction", 90_000.0, 1.1),
    row("communication_media", 75_000.0, 1.3),
    row("education_children", 60_000.0, 1.0),
    row("entertainment_recreation", 80_000.0, 0.85),
    row("financial_services", 150_000.0, 1.5),
    row("health_care_fitness", 110_000.0, 1.4),
    row("manufacturing", 200_000.0, 1.3),
    row("non_classifiable", 50_000.0, 0.8),
    row("online_technology", 100_000.0, 1.8),
    row("pet_services", 55_000.0, 1.0),
    row("restaurants_food", 65_000.0, 0.75),
    row("retail", 70_000.0, 0.65),
    row("service_businesses", 55_000.0, 1.2),
    row("transportation_storage", 140_000.0, 1.1),
    row("travel", 75_000.0, 0.9),
    row("wholesale_distributors", 180_000.0, 1.0),
    row("energy", 250_000.0, 1.4),
    row("engineering", 120_000.0, 1.3),
    row("franchise_resales", 85_000.0, 1.0),
    row("leisure", 70_000.0, 0.8),
    row("real_estate", 95_000.0, 1.2),
    row("tech_media", 110_000.0, 1.6),
    DEFAULT_INDUSTRY,
];

/// Industry row for a category; unresolved categories use the `default` row.
#[must_use]
pub fn industry_profile(category: Option<BusinessCategory>) -> &'static IndustryProfile {
    let key = category.map_or(DEFAULT_INDUSTRY_KEY, BusinessCategory::industry_key);
    INDUSTRY_TABLE
        .iter()
        .find(|row| row.key == key)
        .unwrap_or(&DEFAULT_INDUSTRY)
}

type MultiplierRule = (&'static str, fn(&ValuationFactors) -> f64);

/// Adjustments applied to the base value, in this order.
const MULTIPLIER_CHAIN: &[MultiplierRule] = &[
    ("location", location_multiplier),
    ("rating", rating_multiplier),
    ("age", age_multiplier),
    ("web", web_multiplier),
    ("equipment", equipment_multiplier),
    ("size", size_multiplier),
    ("hours", hours_multiplier),
];

/// Rating floor → multiplier; anything below the last floor gets 0.8.
const RATING_TIERS: &[(f64, f64)] = &[
    (4.5, 1.3),
    (4.0, 1.2),
    (3.5, 1.1),
    (3.0, 1.0),
    (2.5, 0.9),
];
const RATING_FLOOR_MULTIPLIER: f64 = 0.8;

/// Reviews needed before the rating counts toward value.
const MIN_RATED_REVIEWS: u32 = 10;

const LOW_RANGE_FACTOR: f64 = 0.7;
const HIGH_RANGE_FACTOR: f64 = 1.3;

#[must_use]
pub fn location_multiplier(factors: &ValuationFactors) -> f64 {
    match factors.location_quality {
        QualityBand::Excellent => 1.4,
        QualityBand::Good => 1.2,
        QualityBand::Average => 1.0,
        QualityBand::Poor => 0.7,
    }
}

#[must_use]
pub fn rating_multiplier(factors: &ValuationFactors) -> f64 {
    match (factors.rating, factors.review_count) {
        (Some(rating), Some(reviews)) if reviews > MIN_RATED_REVIEWS => RATING_TIERS
            .iter()
            .find(|(floor, _)| rating >= *floor)
            .map_or(RATING_FLOOR_MULTIPLIER, |(_, m)| *m),
        _ => 1.0,
    }
}

/// Zero years is treated the same as unknown.
#[must_use]
pub fn age_multiplier(factors: &ValuationFactors) -> f64 {
    match factors.years_in_business {
        None | Some(0) => 1.0,
        Some(y) if y >= 10 => 1.3,
        Some(y) if y >= 5 => 1.2,
        Some(y) if y >= 2 => 1.1,
        Some(_) => 0.9,
    }
}

#[must_use]
pub fn web_multiplier(factors: &ValuationFactors) -> f64 {
    if !factors.has_website {
        return 0.95;
    }
    match factors.web_presence_quality {
        QualityBand::Excellent => 1.15,
        QualityBand::Good => 1.1,
        QualityBand::Average => 1.05,
        QualityBand::Poor => 1.0,
    }
}

#[must_use]
pub fn equipment_multiplier(factors: &ValuationFactors) -> f64 {
    match factors.equipment_quality {
        EquipmentBand::Excellent => 1.2,
        EquipmentBand::Good => 1.1,
        EquipmentBand::Average => 1.0,
        EquipmentBand::Basic => 0.9,
    }
}

#[must_use]
pub fn size_multiplier(factors: &ValuationFactors) -> f64 {
    match factors.business_size {
        BusinessSize::Large => 1.3,
        BusinessSize::Medium => 1.2,
        BusinessSize::Small => 1.0,
        BusinessSize::Micro => 0.8,
    }
}

#[must_use]
pub fn hours_multiplier(factors: &ValuationFactors) -> f64 {
    match factors.operating_hours {
        HoursBand::Extended => 1.1,
        HoursBand::Standard => 1.0,
        HoursBand::Limited => 0.9,
    }
}

/// Additive evidence score graded into low / medium / high.
#[must_use]
pub fn valuation_confidence(factors: &ValuationFactors) -> ValuationConfidence {
    let mut score = 0u8;

    if factors.rating.is_some() {
        match factors.review_count {
            Some(n) if n >= 50 => score += 2,
            Some(n) if n >= 20 => score += 1,
            _ => {}
        }
    }
    if factors.years_in_business.is_some_and(|y| y >= 2) {
        score += 1;
    }
    if factors.has_website {
        score += 1;
    }
    if factors.category.is_some() {
        score += 1;
    }
    if matches!(
        factors.location_quality,
        QualityBand::Good | QualityBand::Excellent
    ) {
        score += 1;
    }

    match score {
        5.. => ValuationConfidence::High,
        3..=4 => ValuationConfidence::Medium,
        _ => ValuationConfidence::Low,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // rounded and clamped to zero first
fn whole_dollars(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

/// Estimate a low / mid / high value range for one business.
///
/// Never fails: absent inputs fall back to the `default` industry row and
/// neutral or penalizing bands.
#[must_use]
pub fn estimate_business_value(
    factors: &ValuationFactors,
    observer: &dyn PipelineObserver,
) -> ValuationResult {
    let industry = industry_profile(factors.category);
    observer.industry_resolved(industry.key, industry.base_value, industry.base_multiplier);

    let value = MULTIPLIER_CHAIN
        .iter()
        .fold(industry.base_value, |running, (name, rule)| {
            let multiplier = rule(factors);
            let next = running * multiplier;
            observer.multiplier_applied(*name, multiplier, next);
            next
        });

    let mid = value.round();
    let estimated_value = EstimatedValue {
        low: whole_dollars(mid * LOW_RANGE_FACTOR),
        mid: whole_dollars(mid),
        high: whole_dollars(mid * HIGH_RANGE_FACTOR),
    };

    let result = ValuationResult {
        estimated_value,
        confidence: valuation_confidence(factors),
        factors: explain_factors(factors),
        methodology: methodology(industry.key),
        comparables: comparables(factors.category),
    };
    observer.valuation_completed(&result);
    result
}
