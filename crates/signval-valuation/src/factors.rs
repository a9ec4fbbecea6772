//! Map a business profile and its external records onto valuation bands.
//!
//! Every assessor tolerates missing records and falls back to a default band.

use signval_core::{
    BusinessProfile, BusinessSize, EquipmentBand, ExtractionResult, HoursBand, PipelineObserver,
    PlacesRecord, QualityBand, ValuationFactors, WebRecord,
};

const UNKNOWN_LOCATION: &str = "Location not specified";

const PRIME_ADDRESS_MARKERS: &[&str] = &["downtown", "main st", "center"];

const SOCIAL_HOSTS: &[&str] = &["facebook", "instagram"];

/// Rating floor → location band, checked in order.
const RATING_LOCATION_BANDS: &[(f64, QualityBand)] = &[
    (4.5, QualityBand::Excellent),
    (4.0, QualityBand::Good),
    (3.5, QualityBand::Average),
];

/// Review count must exceed the threshold to claim the years.
const REVIEW_YEAR_PROXIES: &[(u32, u32)] = &[(100, 8), (50, 5), (20, 3)];

const REVIEW_SIZE_BANDS: &[(u32, BusinessSize)] = &[
    (500, BusinessSize::Large),
    (100, BusinessSize::Medium),
    (20, BusinessSize::Small),
];

const EQUIPMENT_KEYWORDS: &[(&[&str], EquipmentBand)] = &[
    (&["premium", "luxury", "professional"], EquipmentBand::Excellent),
    (&["quality", "modern"], EquipmentBand::Good),
];

const LONG_DESCRIPTION_CHARS: usize = 200;

/// Derive the full factor snapshot for one business.
#[must_use]
pub fn derive_valuation_factors(
    profile: &BusinessProfile,
    places: Option<&PlacesRecord>,
    web: Option<&WebRecord>,
    extraction: &ExtractionResult,
    observer: &dyn PipelineObserver,
) -> ValuationFactors {
    let review_count = profile.reviews;

    let factors = ValuationFactors {
        category: Some(profile.category),
        location: profile
            .location
            .clone()
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
        rating: profile.rating,
        review_count,
        years_in_business: estimate_years_in_business(review_count),
        has_website: profile.website.is_some(),
        web_presence_quality: assess_web_presence(web, profile.website.as_deref()),
        location_quality: assess_location(profile.address.as_deref(), profile.rating),
        equipment_quality: assess_equipment(&extraction.other_text),
        business_size: assess_business_size(review_count),
        operating_hours: assess_operating_hours(places.and_then(PlacesRecord::weekday_text)),
    };
    observer.factors_derived(&factors);
    factors
}

#[must_use]
pub fn assess_location(address: Option<&str>, rating: Option<f64>) -> QualityBand {
    let Some(address) = address.filter(|a| !a.trim().is_empty()) else {
        return QualityBand::Poor;
    };

    let lower = address.to_lowercase();
    if PRIME_ADDRESS_MARKERS.iter().any(|m| lower.contains(m)) {
        return QualityBand::Excellent;
    }

    rating
        .and_then(|r| {
            RATING_LOCATION_BANDS
                .iter()
                .find(|(floor, _)| r >= *floor)
                .map(|(_, band)| *band)
        })
        .unwrap_or(QualityBand::Average)
}

/// Web presence from the web record and the resolved website.
///
/// A synthesized fallback record counts as no record at all.
#[must_use]
pub fn assess_web_presence(web: Option<&WebRecord>, website: Option<&str>) -> QualityBand {
    let Some(web) = web.filter(|w| !w.is_generic_fallback) else {
        return QualityBand::Poor;
    };
    let Some(website) = website.filter(|w| !w.trim().is_empty()) else {
        return QualityBand::Poor;
    };

    if web
        .description
        .as_deref()
        .is_some_and(|d| d.chars().count() > LONG_DESCRIPTION_CHARS)
    {
        return QualityBand::Good;
    }

    let lower = website.to_lowercase();
    if SOCIAL_HOSTS.iter().any(|s| lower.contains(s)) {
        return QualityBand::Average;
    }
    if website_host(&lower).ends_with(".com") {
        return QualityBand::Good;
    }
    QualityBand::Average
}

/// Host part of a URL-ish string: scheme, path, query, and port removed.
fn website_host(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme
        .split(['/', '?', '#', ':'])
        .next()
        .unwrap_or(without_scheme)
}

/// Review volume as a stand-in for business age. `None` below the lowest tier.
#[must_use]
pub fn estimate_years_in_business(review_count: Option<u32>) -> Option<u32> {
    let reviews = review_count?;
    REVIEW_YEAR_PROXIES
        .iter()
        .find(|(threshold, _)| reviews > *threshold)
        .map(|(_, years)| *years)
}

#[must_use]
pub fn assess_equipment(other_text: &[String]) -> EquipmentBand {
    let text = other_text.join(" ").to_lowercase();
    EQUIPMENT_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| text.contains(kw)))
        .map_or(EquipmentBand::Average, |(_, band)| *band)
}

#[must_use]
pub fn assess_business_size(review_count: Option<u32>) -> BusinessSize {
    let reviews = review_count.unwrap_or(0);
    REVIEW_SIZE_BANDS
        .iter()
        .find(|(threshold, _)| reviews > *threshold)
        .map_or(BusinessSize::Micro, |(_, size)| *size)
}

#[must_use]
pub fn assess_operating_hours(weekday_text: Option<&[String]>) -> HoursBand {
    let Some(lines) = weekday_text else {
        return HoursBand::Standard;
    };
    let text = lines.join(" ").to_lowercase();

    if text.contains("24") || text.contains("midnight") {
        HoursBand::Extended
    } else if text.matches("closed").count() > 2 {
        HoursBand::Limited
    } else {
        HoursBand::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn missing_address_is_poor_location() {
        assert_eq!(assess_location(None, Some(4.9)), QualityBand::Poor);
        assert_eq!(assess_location(Some("  "), Some(4.9)), QualityBand::Poor);
    }

    #[test]
    fn prime_markers_beat_rating() {
        assert_eq!(
            assess_location(Some("12 Main St, Springfield"), Some(2.0)),
            QualityBand::Excellent
        );
        assert_eq!(
            assess_location(Some("Eastgate Shopping Center"), None),
            QualityBand::Excellent
        );
    }

    #[test]
    fn rating_tiers_for_location() {
        let addr = Some("88 Oak Ave");
        assert_eq!(assess_location(addr, Some(4.5)), QualityBand::Excellent);
        assert_eq!(assess_location(addr, Some(4.2)), QualityBand::Good);
        assert_eq!(assess_location(addr, Some(3.5)), QualityBand::Average);
        assert_eq!(assess_location(addr, Some(2.1)), QualityBand::Average);
        assert_eq!(assess_location(addr, None), QualityBand::Average);
    }

    #[test]
    fn web_presence_rules() {
        let web = WebRecord {
            name: "Taco Town".to_string(),
            ..WebRecord::default()
        };
        assert_eq!(assess_web_presence(None, Some("tacotown.com")), QualityBand::Poor);
        assert_eq!(assess_web_presence(Some(&web), None), QualityBand::Poor);
        assert_eq!(
            assess_web_presence(Some(&web), Some("https://www.tacotown.com/menu")),
            QualityBand::Good
        );
        assert_eq!(
            assess_web_presence(Some(&web), Some("https://facebook.com/tacotown")),
            QualityBand::Average
        );
        assert_eq!(
            assess_web_presence(Some(&web), Some("https://tacotown.net")),
            QualityBand::Average
        );
        assert_eq!(
            assess_web_presence(Some(&web), Some("https://tacotown.com.au")),
            QualityBand::Average
        );
    }

    #[test]
    fn generic_fallback_record_is_poor() {
        let web = WebRecord {
            name: "Taco Town".to_string(),
            description: Some("x".repeat(300)),
            is_generic_fallback: true,
            ..WebRecord::default()
        };
        assert_eq!(
            assess_web_presence(Some(&web), Some("https://tacotown.com")),
            QualityBand::Poor
        );
    }

    #[test]
    fn long_description_is_good_even_on_social() {
        let web = WebRecord {
            name: "Taco Town".to_string(),
            description: Some("x".repeat(201)),
            ..WebRecord::default()
        };
        assert_eq!(
            assess_web_presence(Some(&web), Some("https://instagram.com/tacotown")),
            QualityBand::Good
        );
    }

    #[test]
    fn years_from_review_volume() {
        assert_eq!(estimate_years_in_business(Some(101)), Some(8));
        assert_eq!(estimate_years_in_business(Some(100)), Some(5));
        assert_eq!(estimate_years_in_business(Some(21)), Some(3));
        assert_eq!(estimate_years_in_business(Some(20)), None);
        assert_eq!(estimate_years_in_business(None), None);
    }

    #[test]
    fn equipment_keywords_in_priority_order() {
        assert_eq!(
            assess_equipment(&lines(&["MODERN KITCHEN", "Professional Grade"])),
            EquipmentBand::Excellent
        );
        assert_eq!(assess_equipment(&lines(&["Quality Coffee"])), EquipmentBand::Good);
        assert_eq!(assess_equipment(&[]), EquipmentBand::Average);
    }

    #[test]
    fn size_from_review_volume() {
        assert_eq!(assess_business_size(Some(501)), BusinessSize::Large);
        assert_eq!(assess_business_size(Some(500)), BusinessSize::Medium);
        assert_eq!(assess_business_size(Some(21)), BusinessSize::Small);
        assert_eq!(assess_business_size(Some(20)), BusinessSize::Micro);
        assert_eq!(assess_business_size(None), BusinessSize::Micro);
    }

    #[test]
    fn hours_bands() {
        assert_eq!(assess_operating_hours(None), HoursBand::Standard);
        assert_eq!(
            assess_operating_hours(Some(&lines(&["Monday: Open 24 hours"]))),
            HoursBand::Extended
        );
        assert_eq!(
            assess_operating_hours(Some(&lines(&["Friday: 5:00 PM – Midnight"]))),
            HoursBand::Extended
        );
        assert_eq!(
            assess_operating_hours(Some(&lines(&[
                "Monday: Closed",
                "Tuesday: Closed",
                "Wednesday: Closed",
                "Thursday: 9:00 AM – 5:00 PM",
            ]))),
            HoursBand::Limited
        );
        assert_eq!(
            assess_operating_hours(Some(&lines(&["Sunday: Closed", "Monday: Closed"]))),
            HoursBand::Standard
        );
    }
}
