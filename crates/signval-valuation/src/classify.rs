//! Two-stage business category classification.
//!
//! Directory type tags are consulted first through a fixed lookup table; if
//! none map to a category, the free text is scanned against ordered keyword
//! groups. The first matching rule wins in both stages.

use signval_core::{BusinessCategory, PipelineObserver};

/// Directory type tag → category. Tags not listed here carry no signal.
const PLACE_TYPE_CATEGORIES: &[(&str, BusinessCategory)] = &[
    ("restaurant", BusinessCategory::RestaurantsFood),
    ("food", BusinessCategory::RestaurantsFood),
    ("meal_takeaway", BusinessCategory::RestaurantsFood),
    ("bakery", BusinessCategory::RestaurantsFood),
    ("cafe", BusinessCategory::RestaurantsFood),
    ("bar", BusinessCategory::RestaurantsFood),
    ("store", BusinessCategory::Retail),
    ("clothing_store", BusinessCategory::Retail),
    ("electronics_store", BusinessCategory::Retail),
    ("grocery_or_supermarket", BusinessCategory::Retail),
    ("pharmacy", BusinessCategory::Retail),
    ("book_store", BusinessCategory::Retail),
    ("car_dealer", BusinessCategory::AutomotiveBoat),
    ("car_repair", BusinessCategory::AutomotiveBoat),
    ("gas_station", BusinessCategory::AutomotiveBoat),
    ("beauty_salon", BusinessCategory::BeautyPersonalCare),
    ("spa", BusinessCategory::BeautyPersonalCare),
    ("hair_care", BusinessCategory::BeautyPersonalCare),
    ("gym", BusinessCategory::HealthCareFitness),
    ("hospital", BusinessCategory::HealthCareFitness),
    ("dentist", BusinessCategory::HealthCareFitness),
    ("doctor", BusinessCategory::HealthCareFitness),
    ("physiotherapist", BusinessCategory::HealthCareFitness),
    ("bank", BusinessCategory::FinancialServices),
    ("atm", BusinessCategory::FinancialServices),
    ("insurance_agency", BusinessCategory::FinancialServices),
    ("accounting", BusinessCategory::FinancialServices),
    ("real_estate_agency", BusinessCategory::RealEstate),
    ("moving_company", BusinessCategory::TransportationStorage),
    ("taxi_stand", BusinessCategory::TransportationStorage),
    ("travel_agency", BusinessCategory::Travel),
    ("lodging", BusinessCategory::Travel),
    ("tourist_attraction", BusinessCategory::EntertainmentRecreation),
    ("amusement_park", BusinessCategory::EntertainmentRecreation),
    ("movie_theater", BusinessCategory::EntertainmentRecreation),
    ("school", BusinessCategory::EducationChildren),
    ("university", BusinessCategory::EducationChildren),
    ("pet_store", BusinessCategory::PetServices),
    ("veterinary_care", BusinessCategory::PetServices),
];

/// Keyword groups in priority order. Matching is substring-based on the
/// lowercased free text, so "car" also fires on "card".
const KEYWORD_GROUPS: &[(&[&str], BusinessCategory)] = &[
    (
        &[
            "food",
            "restaurant",
            "cafe",
            "coffee",
            "pizza",
            "burger",
            "bar",
            "grill",
            "kitchen",
            "dining",
            "eatery",
            "bistro",
            "deli",
            "bakery",
            "market",
            "food park",
            "food court",
            "food truck",
            "catering",
            "barbecue",
            "bbq",
        ],
        BusinessCategory::RestaurantsFood,
    ),
    (
        &[
            "store", "shop", "retail", "market", "boutique", "outlet", "mall", "plaza",
        ],
        BusinessCategory::Retail,
    ),
    (
        &["auto", "car", "vehicle", "boat"],
        BusinessCategory::AutomotiveBoat,
    ),
    (
        &["beauty", "salon", "spa", "hair"],
        BusinessCategory::BeautyPersonalCare,
    ),
    (
        &["construction", "contractor", "building"],
        BusinessCategory::BuildingConstruction,
    ),
    (
        &["medical", "health", "dental", "fitness", "gym"],
        BusinessCategory::HealthCareFitness,
    ),
    (
        &["tech", "software", "online", "digital", "app", "web", "internet"],
        BusinessCategory::OnlineTechnology,
    ),
    (
        &[
            "service",
            "repair",
            "consulting",
            "cleaning",
            "maintenance",
            "support",
        ],
        BusinessCategory::ServiceBusinesses,
    ),
    (
        &["financial", "accounting", "insurance"],
        BusinessCategory::FinancialServices,
    ),
    (
        &["entertainment", "recreation", "gaming"],
        BusinessCategory::EntertainmentRecreation,
    ),
];

/// Category for a single directory type tag, if the tag is known.
#[must_use]
pub fn category_for_place_type(place_type: &str) -> Option<BusinessCategory> {
    PLACE_TYPE_CATEGORIES
        .iter()
        .find(|(tag, _)| *tag == place_type)
        .map(|(_, category)| *category)
}

/// First keyword group with any hit in `free_text`.
#[must_use]
pub fn category_for_keywords(free_text: &str) -> Option<BusinessCategory> {
    let lower = free_text.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, category)| *category)
}

/// Resolve the business category from directory tags, then free text.
///
/// Never fails: text that matches nothing resolves to
/// [`BusinessCategory::NonClassifiable`].
#[must_use]
pub fn categorize_business(
    free_text: &str,
    place_types: &[String],
    observer: &dyn PipelineObserver,
) -> BusinessCategory {
    if let Some(category) = place_types
        .iter()
        .find_map(|t| category_for_place_type(t))
    {
        observer.category_resolved(category, "types");
        return category;
    }

    if let Some(category) = category_for_keywords(free_text) {
        observer.category_resolved(category, "keywords");
        return category;
    }

    observer.category_resolved(BusinessCategory::NonClassifiable, "fallback");
    BusinessCategory::NonClassifiable
}

#[cfg(test)]
mod tests {
    use signval_core::NoopObserver;

    use super::*;

    fn types(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn first_known_type_tag_wins() {
        let tags = types(&["point_of_interest", "cafe", "store"]);
        assert_eq!(
            categorize_business("Anything", &tags, &NoopObserver),
            BusinessCategory::RestaurantsFood
        );
    }

    #[test]
    fn unknown_tags_fall_through_to_keywords() {
        let tags = types(&["establishment", "point_of_interest"]);
        assert_eq!(
            categorize_business("Bright Smile Dental", &tags, &NoopObserver),
            BusinessCategory::HealthCareFitness
        );
    }

    #[test]
    fn food_group_outranks_retail_for_market() {
        assert_eq!(
            category_for_keywords("Riverside Farmers Market"),
            Some(BusinessCategory::RestaurantsFood)
        );
        assert_eq!(
            category_for_keywords("Corner Gift Shop"),
            Some(BusinessCategory::Retail)
        );
    }

    #[test]
    fn keyword_match_is_substring_based() {
        assert_eq!(
            category_for_keywords("Greeting Card Gallery"),
            Some(BusinessCategory::AutomotiveBoat)
        );
    }

    #[test]
    fn unmatched_text_is_non_classifiable() {
        assert_eq!(category_for_keywords("Zenith Holdings"), None);
        assert_eq!(
            categorize_business("Zenith Holdings", &[], &NoopObserver),
            BusinessCategory::NonClassifiable
        );
    }

    #[test]
    fn type_table_lookup() {
        assert_eq!(
            category_for_place_type("veterinary_care"),
            Some(BusinessCategory::PetServices)
        );
        assert_eq!(category_for_place_type("establishment"), None);
    }
}
