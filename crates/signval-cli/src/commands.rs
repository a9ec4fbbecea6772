//! Command handlers. Each reads its JSON inputs, runs the pipeline with a
//! [`TracingObserver`], and returns the value `main` prints.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use signval_core::{
    AppConfig, ExtractionResult, RawTextBlock, TracingObserver, ValuationFactors, ValuationResult,
};
use signval_extract::extract_business_identity;
use signval_valuation::{build_business_profile, derive_valuation_factors, estimate_business_value};

use crate::lookup::{gather_external_records, FileDirectoryLookup, FileWebSearch};
use crate::report::{report_metadata, AnalysisReport};

async fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

pub(crate) fn render_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

/// `extract`: OCR block → [`ExtractionResult`].
pub(crate) async fn run_extract(ocr: &Path) -> anyhow::Result<ExtractionResult> {
    let block: RawTextBlock = read_json(ocr).await?;
    let extraction = extract_business_identity(&block, &TracingObserver)?;
    Ok(extraction)
}

/// `value`: factor snapshot → [`ValuationResult`]. Missing fields take defaults.
pub(crate) async fn run_value(factors: &Path) -> anyhow::Result<ValuationResult> {
    let factors: ValuationFactors = read_json(factors).await?;
    Ok(estimate_business_value(&factors, &TracingObserver))
}

/// `analyze`: OCR block plus optional external records → [`AnalysisReport`].
///
/// # Errors
///
/// Fails only when the OCR input cannot be read or contains no detections.
/// External lookups degrade to `None`.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    ocr: &Path,
    places_path: Option<PathBuf>,
    web_path: Option<PathBuf>,
) -> anyhow::Result<AnalysisReport> {
    let observer = TracingObserver;
    let block: RawTextBlock = read_json(ocr).await?;
    let extraction = extract_business_identity(&block, &observer)?;

    let query_name = extraction
        .primary_name()
        .unwrap_or(&config.unknown_business_label)
        .to_string();
    let (places, web) = gather_external_records(
        &FileDirectoryLookup { path: places_path },
        &FileWebSearch { path: web_path },
        &query_name,
        extraction.primary_address(),
        Duration::from_secs(config.lookup_timeout_secs),
    )
    .await;

    let profile = build_business_profile(
        &extraction,
        places.as_ref(),
        web.as_ref(),
        &config.unknown_business_label,
        &observer,
    );
    let factors = derive_valuation_factors(
        &profile,
        places.as_ref(),
        web.as_ref(),
        &extraction,
        &observer,
    );
    let valuation = estimate_business_value(&factors, &observer);

    tracing::info!(
        business = %profile.business_name,
        category = %profile.category,
        low = valuation.estimated_value.low,
        high = valuation.estimated_value.high,
        confidence = ?valuation.confidence,
        "analysis completed"
    );

    let metadata = report_metadata(places.is_some(), web.is_some(), Utc::now());
    Ok(AnalysisReport {
        extraction,
        profile,
        valuation,
        metadata,
    })
}
