//! Lead normalization, scoring, and the plumbing around them.

pub mod airtable;
pub mod domain;
pub mod enrichment;
pub(crate) mod keywords;
pub mod normalizer;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use airtable::{AirtableLeadImporter, LeadImportError};
pub use domain::{
    BuyerType, LeadRecord, LeadScore, PainPoint, PropertyFacts, QualificationTier, RejectReason,
};
pub use enrichment::{enrich_with_fallback, EnrichmentError, NoopEnricher, PropertyEnricher};
pub use normalizer::{HoaPermission, NormalizedSignals, ShadingCode};
pub use router::lead_router;
pub use scoring::{score, LeadEvaluation, LeadScoringEngine};
pub use service::LeadQualificationService;
