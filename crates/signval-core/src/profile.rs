use serde::{Deserialize, Serialize};

use crate::category::BusinessCategory;

/// Merged business identity from OCR and external records.
///
/// Every contact field is optional; `None` means no source provided it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub business_name: String,
    pub category: BusinessCategory,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub description: String,
    /// City/state fragment of the address, when one can be isolated.
    pub location: Option<String>,
    pub hours: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
    /// Up to three readable directory types, e.g. `"Coffee Shop, Cafe"`.
    pub types_summary: Option<String>,
}
