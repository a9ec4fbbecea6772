//! Merge OCR extraction with external records into one business profile.

use signval_core::{
    BusinessCategory, BusinessProfile, ExtractionResult, PipelineObserver, PlacesRecord,
    WebRecord,
};

use crate::classify::categorize_business;

/// Directory tags too generic to describe a business.
const GENERIC_PLACE_TYPES: &[&str] = &["establishment", "point_of_interest"];

const MAX_SUMMARY_TYPES: usize = 3;

const FALLBACK_FREE_TEXT: &str = "Business";

/// Build a [`BusinessProfile`] from every available source.
///
/// Directory data takes precedence over web data, which takes precedence over
/// OCR. `unknown_label` names the business when no source yields a name.
#[must_use]
pub fn build_business_profile(
    extraction: &ExtractionResult,
    places: Option<&PlacesRecord>,
    web: Option<&WebRecord>,
    unknown_label: &str,
    observer: &dyn PipelineObserver,
) -> BusinessProfile {
    let business_name = places
        .and_then(|p| non_blank(&p.name))
        .or_else(|| web.and_then(|w| non_blank(&w.name)))
        .or_else(|| extraction.primary_name())
        .unwrap_or(unknown_label)
        .to_string();

    let free_text = places
        .and_then(|p| non_blank(&p.name))
        .or_else(|| web.and_then(|w| w.business_type.as_deref()))
        .unwrap_or(FALLBACK_FREE_TEXT);
    let place_types = places.map_or(&[][..], |p| p.types.as_slice());
    let category = categorize_business(free_text, place_types, observer);

    let external_address = places
        .and_then(PlacesRecord::address)
        .or_else(|| web.and_then(|w| w.address.as_deref()));
    let address = external_address
        .or_else(|| extraction.primary_address())
        .map(str::to_string);

    let phone = places
        .and_then(PlacesRecord::phone)
        .or_else(|| web.and_then(|w| w.phone.as_deref()))
        .or_else(|| extraction.phone_numbers.first().map(String::as_str))
        .map(str::to_string);

    let website = places
        .and_then(|p| p.website.as_deref())
        .or_else(|| web.and_then(|w| w.website.as_deref()))
        .or_else(|| extraction.websites.first().map(String::as_str))
        .map(str::to_string);

    let email = extraction.emails.first().cloned();
    let location = city_state(external_address).map(str::to_string);
    let hours = places
        .and_then(PlacesRecord::weekday_text)
        .map(|lines| lines.join(", "));
    let rating = places.and_then(|p| p.rating);
    let reviews = places.and_then(|p| p.user_ratings_total);
    let types_summary = places.and_then(|p| summarize_types(&p.types));

    let description = describe_business(
        &business_name,
        category,
        location.as_deref(),
        places,
    );

    BusinessProfile {
        business_name,
        category,
        address,
        phone,
        website,
        email,
        description,
        location,
        hours,
        rating,
        reviews,
        types_summary,
    }
}

fn non_blank(text: &str) -> Option<&str> {
    Some(text).filter(|t| !t.trim().is_empty())
}

/// Second-to-last comma-separated part of an address with at least three
/// parts: `"1 Elm St, Portland, OR 97201"` yields `"Portland"`.
#[must_use]
pub fn city_state(address: Option<&str>) -> Option<&str> {
    let parts: Vec<&str> = address?.split(',').map(str::trim).collect();
    if parts.len() >= 3 {
        parts.get(parts.len() - 2).copied()
    } else {
        None
    }
}

/// Readable summary of up to three specific directory types.
#[must_use]
pub fn summarize_types(types: &[String]) -> Option<String> {
    let readable: Vec<String> = types
        .iter()
        .filter(|t| !GENERIC_PLACE_TYPES.contains(&t.as_str()))
        .take(MAX_SUMMARY_TYPES)
        .map(|t| title_case(&t.replace('_', " ")))
        .collect();
    if readable.is_empty() {
        None
    } else {
        Some(readable.join(", "))
    }
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn industry_sentence(category: BusinessCategory) -> &'static str {
    match category {
        BusinessCategory::RestaurantsFood => {
            "This established restaurant offers quality dining with fresh ingredients and excellent customer service. "
        }
        BusinessCategory::Retail => {
            "This retail establishment serves customers with a wide selection of quality products and personalized service. "
        }
        BusinessCategory::HealthCareFitness => {
            "This healthcare business provides professional services with a focus on customer care and quality outcomes. "
        }
        BusinessCategory::BeautyPersonalCare => {
            "This beauty and personal care business offers professional services in a comfortable environment. "
        }
        BusinessCategory::AutomotiveBoat => {
            "This automotive business provides reliable services with experienced technicians and quality parts. "
        }
        _ => {
            "This established business serves the local community with quality services and professional expertise. "
        }
    }
}

fn describe_business(
    name: &str,
    category: BusinessCategory,
    location: Option<&str>,
    places: Option<&PlacesRecord>,
) -> String {
    let mut description = format!("{name} is a {}", category.label().to_lowercase());
    if let Some(location) = location {
        description.push_str(&format!(" located in {location}"));
    }
    description.push_str(". ");
    description.push_str(industry_sentence(category));

    if let Some((rating, reviews)) = places.and_then(|p| p.rating.zip(p.user_ratings_total)) {
        if reviews > 0 {
            description.push_str(&format!(
                "With a {rating}-star rating based on {reviews} customer reviews, "
            ));
        }
    }

    if places.and_then(|p| p.business_status.as_deref()) == Some("OPERATIONAL") {
        description.push_str("the business is currently operating and actively serving customers. ");
    }

    description.push_str(&format!(
        "{name} represents a solid business opportunity with established operations and a proven track record in the community."
    ));
    description
}

#[cfg(test)]
mod tests {
    use signval_core::{ConfidenceLevel, FieldConfidence, NoopObserver, OpeningHours};

    use super::*;

    fn extraction() -> ExtractionResult {
        ExtractionResult {
            business_names: vec!["GLORIA JEAN'S COFFEE SHOP".to_string()],
            addresses: vec!["123 Main St".to_string()],
            phone_numbers: vec!["(555) 123-4567".to_string()],
            websites: vec![],
            emails: vec!["hello@gloriajeans.com".to_string()],
            other_text: vec![],
            confidence: FieldConfidence {
                business_name: ConfidenceLevel::High,
                address: ConfidenceLevel::High,
                phone: ConfidenceLevel::Medium,
            },
        }
    }

    fn places() -> PlacesRecord {
        PlacesRecord {
            name: "Gloria Jean's Coffees".to_string(),
            formatted_address: "123 Main St, Springfield, IL 62701, USA".to_string(),
            international_phone_number: Some("+1 555-010-2000".to_string()),
            website: Some("https://gloriajeans.com".to_string()),
            business_status: Some("OPERATIONAL".to_string()),
            opening_hours: Some(OpeningHours {
                weekday_text: vec![
                    "Monday: 7:00 AM – 6:00 PM".to_string(),
                    "Tuesday: 7:00 AM – 6:00 PM".to_string(),
                ],
            }),
            rating: Some(4.6),
            user_ratings_total: Some(120),
            types: vec![
                "cafe".to_string(),
                "point_of_interest".to_string(),
                "food".to_string(),
                "meal_takeaway".to_string(),
                "establishment".to_string(),
                "store".to_string(),
            ],
            ..PlacesRecord::default()
        }
    }

    #[test]
    fn ocr_only_profile_uses_extracted_fields() {
        let profile =
            build_business_profile(&extraction(), None, None, "Unknown Business", &NoopObserver);
        assert_eq!(profile.business_name, "GLORIA JEAN'S COFFEE SHOP");
        assert_eq!(profile.category, BusinessCategory::NonClassifiable);
        assert_eq!(profile.address.as_deref(), Some("123 Main St"));
        assert_eq!(profile.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(profile.email.as_deref(), Some("hello@gloriajeans.com"));
        assert!(profile.website.is_none());
        assert!(profile.location.is_none());
        assert!(profile.hours.is_none());
    }

    #[test]
    fn directory_record_takes_precedence() {
        let places = places();
        let profile = build_business_profile(
            &extraction(),
            Some(&places),
            None,
            "Unknown Business",
            &NoopObserver,
        );
        assert_eq!(profile.business_name, "Gloria Jean's Coffees");
        assert_eq!(profile.category, BusinessCategory::RestaurantsFood);
        assert_eq!(profile.phone.as_deref(), Some("+1 555-010-2000"));
        assert_eq!(profile.location.as_deref(), Some("IL 62701"));
        assert_eq!(
            profile.hours.as_deref(),
            Some("Monday: 7:00 AM – 6:00 PM, Tuesday: 7:00 AM – 6:00 PM")
        );
        assert_eq!(
            profile.types_summary.as_deref(),
            Some("Cafe, Food, Meal Takeaway")
        );
        assert_eq!(profile.rating, Some(4.6));
        assert_eq!(profile.reviews, Some(120));
    }

    #[test]
    fn description_includes_rating_and_status() {
        let places = places();
        let profile = build_business_profile(
            &extraction(),
            Some(&places),
            None,
            "Unknown Business",
            &NoopObserver,
        );
        assert!(profile
            .description
            .starts_with("Gloria Jean's Coffees is a restaurants & food located in IL 62701. "));
        assert!(profile
            .description
            .contains("With a 4.6-star rating based on 120 customer reviews, "));
        assert!(profile
            .description
            .contains("the business is currently operating"));
        assert!(profile.description.ends_with("proven track record in the community."));
    }

    #[test]
    fn web_record_fills_gaps() {
        let web = WebRecord {
            name: "Harbor Auto Repair".to_string(),
            website: Some("https://harborauto.com".to_string()),
            business_type: Some("auto repair".to_string()),
            ..WebRecord::default()
        };
        let empty = ExtractionResult {
            business_names: vec![],
            addresses: vec![],
            phone_numbers: vec![],
            websites: vec![],
            emails: vec![],
            other_text: vec![],
            confidence: extraction().confidence,
        };
        let profile = build_business_profile(&empty, None, Some(&web), "Unknown", &NoopObserver);
        assert_eq!(profile.business_name, "Harbor Auto Repair");
        assert_eq!(profile.category, BusinessCategory::AutomotiveBoat);
        assert_eq!(profile.website.as_deref(), Some("https://harborauto.com"));
        assert!(profile.address.is_none());
    }

    #[test]
    fn unknown_label_when_no_name_source() {
        let mut empty = extraction();
        empty.business_names.clear();
        let profile = build_business_profile(&empty, None, None, "Mystery Shop", &NoopObserver);
        assert_eq!(profile.business_name, "Mystery Shop");
        assert!(profile.description.starts_with("Mystery Shop is a non-classifiable establishments. "));
    }

    #[test]
    fn city_state_needs_three_parts() {
        assert_eq!(city_state(Some("1 Elm St, Portland, OR 97201")), Some("Portland"));
        assert_eq!(city_state(Some("1 Elm St, Portland")), None);
        assert_eq!(city_state(None), None);
    }

    #[test]
    fn types_summary_skips_generic_tags() {
        let tags = vec!["establishment".to_string(), "point_of_interest".to_string()];
        assert_eq!(summarize_types(&tags), None);
        assert_eq!(
            summarize_types(&["hair_care".to_string()]),
            Some("Hair Care".to_string())
        );
    }
}
