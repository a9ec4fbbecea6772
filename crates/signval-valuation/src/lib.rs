//! Business profile assembly and rule-based valuation.
//!
//! Nothing in this crate fails: missing inputs degrade to default bands and
//! the `default` industry row.

pub mod classify;
pub mod explain;
pub mod factors;
pub mod profile;
pub mod scorer;

pub use classify::categorize_business;
pub use factors::derive_valuation_factors;
pub use profile::build_business_profile;
pub use scorer::{estimate_business_value, industry_profile, IndustryProfile};
