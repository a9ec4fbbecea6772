//! Shared data model and configuration for the storefront identity and
//! valuation engine.

pub mod app_config;
pub mod category;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod extraction;
pub mod observer;
pub mod profile;
pub mod records;
pub mod valuation;

pub use app_config::{AppConfig, Environment};
pub use category::{BusinessCategory, DEFAULT_INDUSTRY_KEY};
pub use collaborators::{DirectoryLookup, WebSearch};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{CollaboratorError, ConfigError};
pub use extraction::{
    CandidateStrategy, ConfidenceLevel, ExtractionResult, FieldConfidence, NameCandidate,
    RawTextBlock,
};
pub use observer::{NoopObserver, PipelineObserver, TracingObserver};
pub use profile::BusinessProfile;
pub use records::{OpeningHours, PlacesRecord, WebRecord};
pub use valuation::{
    BusinessSize, EquipmentBand, EstimatedValue, HoursBand, Impact, QualityBand,
    ValuationConfidence, ValuationFactor, ValuationFactors, ValuationResult,
};
