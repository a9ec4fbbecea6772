//! Business identity extraction from storefront OCR text.
//!
//! Cleans OCR lines, generates business-name candidates with three
//! independent strategies, scores and deduplicates them, grades extraction
//! confidence, and pulls contact fields out of the full text.

pub mod confidence;
pub mod error;
pub mod fields;
pub mod pipeline;
pub mod preprocess;
pub mod scorer;
pub mod strategies;

pub use confidence::{estimate_confidence, ConfidenceScores};
pub use error::ExtractError;
pub use pipeline::{analyze_text, extract_business_identity};
pub use preprocess::preprocess_lines;
pub use scorer::{dedup_candidates, rank_candidates, score_name, MAX_BUSINESS_NAMES};
pub use strategies::generate_candidates;
