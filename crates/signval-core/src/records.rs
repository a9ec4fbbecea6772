//! Record shapes returned by the external lookup collaborators.
//!
//! Field names follow the collaborators' own wire contracts, which is why the
//! directory record is snake_case and the web record is camelCase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

/// A business listing from the directory-lookup collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacesRecord {
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl PlacesRecord {
    /// Weekday hours text, absent when the listing carries no hours.
    #[must_use]
    pub fn weekday_text(&self) -> Option<&[String]> {
        self.opening_hours
            .as_ref()
            .map(|h| h.weekday_text.as_slice())
            .filter(|lines| !lines.is_empty())
    }

    /// Contact phone, preferring the international form when both are listed.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.international_phone_number
            .as_deref()
            .or(self.phone.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// Formatted address, treating an empty string as absent.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        Some(self.formatted_address.as_str()).filter(|s| !s.trim().is_empty())
    }
}

/// A business summary assembled by the web-search collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebRecord {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
    /// Set when the record is a synthesized placeholder rather than real search data.
    #[serde(default)]
    pub is_generic_fallback: bool,
}
