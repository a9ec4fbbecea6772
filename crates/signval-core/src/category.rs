//! Fixed business category taxonomy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessCategory {
    Agriculture,
    #[serde(rename = "Automotive & Boat")]
    AutomotiveBoat,
    #[serde(rename = "Beauty & Personal Care")]
    BeautyPersonalCare,
    #[serde(rename = "Building & Construction")]
    BuildingConstruction,
    #[serde(rename = "Communication & Media")]
    CommunicationMedia,
    #[serde(rename = "Education & Children")]
    EducationChildren,
    #[serde(rename = "Entertainment & Recreation")]
    EntertainmentRecreation,
    #[serde(rename = "Financial Services")]
    FinancialServices,
    #[serde(rename = "Health Care & Fitness")]
    HealthCareFitness,
    Manufacturing,
    #[serde(rename = "Non-Classifiable Establishments")]
    NonClassifiable,
    #[serde(rename = "Online & Technology")]
    OnlineTechnology,
    #[serde(rename = "Pet Services")]
    PetServices,
    #[serde(rename = "Restaurants & Food")]
    RestaurantsFood,
    Retail,
    #[serde(rename = "Service Businesses")]
    ServiceBusinesses,
    #[serde(rename = "Transportation & Storage")]
    TransportationStorage,
    Travel,
    #[serde(rename = "Wholesale & Distribution")]
    WholesaleDistribution,
    Energy,
    Engineering,
    #[serde(rename = "Franchise Resales")]
    FranchiseResales,
    Leisure,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Tech & Media")]
    TechMedia,
}

/// `(category, display label, industry table key)` in declaration order.
const CATEGORY_TABLE: &[(BusinessCategory, &str, &str)] = &[
    (BusinessCategory::Agriculture, "Agriculture", "agriculture"),
    (BusinessCategory::AutomotiveBoat, "Automotive & Boat", "automotive_boat"),
    (
        BusinessCategory::BeautyPersonalCare,
        "Beauty & Personal Care",
        "beauty_personal_care",
    ),
    (
        BusinessCategory::BuildingConstruction,
        "Building & Construction",
        "building_construction",
    ),
    (
        BusinessCategory::CommunicationMedia,
        "Communication & Media",
        "communication_media",
    ),
    (
        BusinessCategory::EducationChildren,
        "Education & Children",
        "education_children",
    ),
    (
        BusinessCategory::EntertainmentRecreation,
        "Entertainment & Recreation",
        "entertainment_recreation",
    ),
    (
        BusinessCategory::FinancialServices,
        "Financial Services",
        "financial_services",
    ),
    (
        BusinessCategory::HealthCareFitness,
        "Health Care & Fitness",
        "health_care_fitness",
    ),
    (BusinessCategory::Manufacturing, "Manufacturing", "manufacturing"),
    (
        BusinessCategory::NonClassifiable,
        "Non-Classifiable Establishments",
        "non_classifiable",
    ),
    (
        BusinessCategory::OnlineTechnology,
        "Online & Technology",
        "online_technology",
    ),
    (BusinessCategory::PetServices, "Pet Services", "pet_services"),
    (
        BusinessCategory::RestaurantsFood,
        "Restaurants & Food",
        "restaurants_food",
    ),
    (BusinessCategory::Retail, "Retail", "retail"),
    (
        BusinessCategory::ServiceBusinesses,
        "Service Businesses",
        "service_businesses",
    ),
    (
        BusinessCategory::TransportationStorage,
        "Transportation & Storage",
        "transportation_storage",
    ),
    (BusinessCategory::Travel, "Travel", "travel"),
    (
        BusinessCategory::WholesaleDistribution,
        "Wholesale & Distribution",
        "wholesale_distributors",
    ),
    (BusinessCategory::Energy, "Energy", "energy"),
    (BusinessCategory::Engineering, "Engineering", "engineering"),
    (
        BusinessCategory::FranchiseResales,
        "Franchise Resales",
        "franchise_resales",
    ),
    (BusinessCategory::Leisure, "Leisure", "leisure"),
    (BusinessCategory::RealEstate, "Real Estate", "real_estate"),
    (BusinessCategory::TechMedia, "Tech & Media", "tech_media"),
];

/// Industry key used when no category could be resolved.
pub const DEFAULT_INDUSTRY_KEY: &str = "default";

impl BusinessCategory {
    fn row(self) -> (BusinessCategory, &'static str, &'static str) {
        CATEGORY_TABLE
            .iter()
            .copied()
            .find(|(category, _, _)| *category == self)
            .unwrap_or((
                BusinessCategory::NonClassifiable,
                "Non-Classifiable Establishments",
                "non_classifiable",
            ))
    }

    /// Human-readable label, e.g. `"Restaurants & Food"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.row().1
    }

    /// Key into the industry valuation table, e.g. `"restaurants_food"`.
    #[must_use]
    pub fn industry_key(self) -> &'static str {
        self.row().2
    }

    /// Resolve a display label back to its category. Exact match only.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .find(|(_, l, _)| *l == label)
            .map(|(category, _, _)| *category)
    }

    pub fn all() -> impl Iterator<Item = BusinessCategory> {
        CATEGORY_TABLE.iter().map(|(category, _, _)| *category)
    }
}

impl std::fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
