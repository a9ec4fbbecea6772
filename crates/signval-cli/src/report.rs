use chrono::{DateTime, Utc};
use serde::Serialize;
use signval_core::{BusinessProfile, ConfidenceLevel, ExtractionResult, ValuationResult};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportMetadata {
    pub processed_at: DateTime<Utc>,
    pub sources_used: Vec<&'static str>,
    /// `High` only when both external records were found.
    pub confidence: ConfidenceLevel,
}

/// Full output of the `analyze` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalysisReport {
    pub extraction: ExtractionResult,
    pub profile: BusinessProfile,
    pub valuation: ValuationResult,
    pub metadata: ReportMetadata,
}

pub(crate) fn report_metadata(
    has_places: bool,
    has_web: bool,
    processed_at: DateTime<Utc>,
) -> ReportMetadata {
    let mut sources_used = Vec::with_capacity(4);
    if has_places {
        sources_used.push("Directory Lookup");
    }
    if has_web {
        sources_used.push("Web Search");
    }
    sources_used.extend(["OCR", "Valuation Model"]);

    ReportMetadata {
        processed_at,
        sources_used,
        confidence: if has_places && has_web {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::Medium
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn both_records_give_high_confidence() {
        let meta = report_metadata(true, true, at());
        assert_eq!(
            meta.sources_used,
            vec!["Directory Lookup", "Web Search", "OCR", "Valuation Model"]
        );
        assert_eq!(meta.confidence, ConfidenceLevel::High);
    }

    #[test]
    fn ocr_only_is_medium() {
        let meta = report_metadata(false, false, at());
        assert_eq!(meta.sources_used, vec!["OCR", "Valuation Model"]);
        assert_eq!(meta.confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn metadata_serializes_camel_case() {
        let json = serde_json::to_value(report_metadata(false, true, at())).unwrap();
        assert_eq!(json["processedAt"], "2026-03-14T09:30:00Z");
        assert_eq!(json["sourcesUsed"][0], "Web Search");
        assert_eq!(json["confidence"], "Medium");
    }
}
