//! Extraction orchestration.

use signval_core::{ExtractionResult, PipelineObserver, RawTextBlock};

use crate::confidence::estimate_confidence;
use crate::error::ExtractError;
use crate::fields::{
    extract_addresses, extract_emails, extract_phone_numbers, extract_websites, other_text,
};
use crate::preprocess::preprocess_lines;
use crate::scorer::rank_candidates;
use crate::strategies::generate_candidates;

/// Extract a business identity from one OCR block.
///
/// # Errors
///
/// Returns [`ExtractError::NoTextDetected`] when the OCR collaborator
/// reported zero detections. No partial result is produced in that case.
pub fn extract_business_identity(
    block: &RawTextBlock,
    observer: &dyn PipelineObserver,
) -> Result<ExtractionResult, ExtractError> {
    if block.detection_count == 0 {
        return Err(ExtractError::NoTextDetected);
    }
    Ok(analyze_text(&block.full_text, block.detection_count, observer))
}

/// Infallible core of [`extract_business_identity`].
///
/// 1. Preprocess lines.
/// 2. Generate candidates (context, positional, pattern).
/// 3. Score, dedup, and keep the top names.
/// 4. Extract contact fields from the full text.
/// 5. Grade confidence.
///
/// Empty text yields empty lists and `Low` name confidence.
pub fn analyze_text(
    full_text: &str,
    detection_count: usize,
    observer: &dyn PipelineObserver,
) -> ExtractionResult {
    let lines = preprocess_lines(full_text);
    let raw_line_count = full_text.lines().filter(|l| !l.trim().is_empty()).count();
    observer.lines_preprocessed(&lines, raw_line_count.saturating_sub(lines.len()));

    let candidates = generate_candidates(&lines);
    let business_names = rank_candidates(candidates, &lines, observer);

    let addresses = extract_addresses(full_text);
    let phone_numbers = extract_phone_numbers(full_text);
    let websites = extract_websites(full_text);
    let emails = extract_emails(full_text);
    let other = other_text(full_text, &phone_numbers, &websites, &emails);

    let (_, confidence) = estimate_confidence(detection_count, business_names.len(), full_text);

    let result = ExtractionResult {
        business_names,
        addresses,
        phone_numbers,
        websites,
        emails,
        other_text: other,
        confidence,
    };
    observer.extraction_completed(&result);
    result
}
