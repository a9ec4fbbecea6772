//! Injectable pipeline observer.
//!
//! Every stage takes a `&dyn PipelineObserver` instead of logging through a
//! global. All hooks default to no-ops so implementors override only what
//! they care about.

use crate::category::BusinessCategory;
use crate::extraction::{ExtractionResult, NameCandidate};
use crate::valuation::{ValuationFactors, ValuationResult};

pub trait PipelineObserver {
    fn lines_preprocessed(&self, _kept: &[String], _dropped: usize) {}

    fn candidate_scored(&self, _candidate: &NameCandidate) {}

    fn names_ranked(&self, _names: &[String]) {}

    fn extraction_completed(&self, _result: &ExtractionResult) {}

    /// `source` is `"types"` or `"keywords"` or `"fallback"`.
    fn category_resolved(&self, _category: BusinessCategory, _source: &'static str) {}

    fn factors_derived(&self, _factors: &ValuationFactors) {}

    fn industry_resolved(&self, _key: &str, _base_value: f64, _base_multiplier: f64) {}

    fn multiplier_applied(&self, _name: &'static str, _multiplier: f64, _running_value: f64) {}

    fn valuation_completed(&self, _result: &ValuationResult) {}
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that forwards events to `tracing` as structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn lines_preprocessed(&self, kept: &[String], dropped: usize) {
        tracing::debug!(kept = kept.len(), dropped, lines = ?kept, "ocr lines preprocessed");
    }

    fn candidate_scored(&self, candidate: &NameCandidate) {
        tracing::debug!(
            name = %candidate.name,
            strategy = candidate.strategy.as_str(),
            score = candidate.score,
            "name candidate scored"
        );
    }

    fn names_ranked(&self, names: &[String]) {
        tracing::debug!(names = ?names, "business names ranked");
    }

    fn extraction_completed(&self, result: &ExtractionResult) {
        tracing::info!(
            business_names = result.business_names.len(),
            addresses = result.addresses.len(),
            phone_numbers = result.phone_numbers.len(),
            websites = result.websites.len(),
            emails = result.emails.len(),
            name_confidence = %result.confidence.business_name,
            "extraction completed"
        );
    }

    fn category_resolved(&self, category: BusinessCategory, source: &'static str) {
        tracing::debug!(category = %category, source, "business category resolved");
    }

    fn factors_derived(&self, factors: &ValuationFactors) {
        tracing::debug!(factors = ?factors, "valuation factors derived");
    }

    fn industry_resolved(&self, key: &str, base_value: f64, base_multiplier: f64) {
        tracing::debug!(key, base_value, base_multiplier, "industry row resolved");
    }

    fn multiplier_applied(&self, name: &'static str, multiplier: f64, running_value: f64) {
        tracing::debug!(name, multiplier, running_value, "valuation multiplier applied");
    }

    fn valuation_completed(&self, result: &ValuationResult) {
        tracing::info!(
            low = result.estimated_value.low,
            mid = result.estimated_value.mid,
            high = result.estimated_value.high,
            confidence = ?result.confidence,
            factors = result.factors.len(),
            "valuation completed"
        );
    }
}
