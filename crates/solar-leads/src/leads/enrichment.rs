//! Pre-scoring hook for property lookups (permits, parcel data, drive time).
//!
//! Scoring never depends on enrichment having run: a failed or slow lookup falls
//! back to the lead exactly as it was submitted.

use super::domain::LeadRecord;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Source of additional property attributes for a lead.
pub trait PropertyEnricher: Send + Sync {
    fn enrich(
        &self,
        lead: LeadRecord,
    ) -> impl Future<Output = Result<LeadRecord, EnrichmentError>> + Send;
}

/// Enrichment failure; always recoverable by scoring the unenriched lead.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("property lookup unavailable: {0}")]
    Unavailable(String),
    #[error("property lookup returned unusable data: {0}")]
    InvalidResponse(String),
}

/// Passes leads through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnricher;

impl PropertyEnricher for NoopEnricher {
    async fn enrich(&self, lead: LeadRecord) -> Result<LeadRecord, EnrichmentError> {
        Ok(lead)
    }
}

/// Runs the enricher within `timeout`, returning the original lead on failure or expiry.
pub async fn enrich_with_fallback<E>(
    enricher: &E,
    lead: LeadRecord,
    timeout: Duration,
) -> LeadRecord
where
    E: PropertyEnricher,
{
    match tokio::time::timeout(timeout, enricher.enrich(lead.clone())).await {
        Ok(Ok(enriched)) => enriched,
        Ok(Err(err)) => {
            warn!(error = %err, "enrichment failed; scoring submitted attributes");
            lead
        }
        Err(_) => {
            warn!(
                timeout_ms = timeout.as_millis() as u64,
                "enrichment timed out; scoring submitted attributes"
            );
            lead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::domain::PropertyFacts;

    struct FailingEnricher;

    impl PropertyEnricher for FailingEnricher {
        async fn enrich(&self, _lead: LeadRecord) -> Result<LeadRecord, EnrichmentError> {
            Err(EnrichmentError::Unavailable("parcel service offline".to_string()))
        }
    }

    struct SlowEnricher;

    impl PropertyEnricher for SlowEnricher {
        async fn enrich(&self, mut lead: LeadRecord) -> Result<LeadRecord, EnrichmentError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            lead.roof_type = Some("Asphalt".to_string());
            Ok(lead)
        }
    }

    struct ParcelEnricher;

    impl PropertyEnricher for ParcelEnricher {
        async fn enrich(&self, mut lead: LeadRecord) -> Result<LeadRecord, EnrichmentError> {
            lead.fill_missing_property_facts(PropertyFacts {
                roof_type: Some("Asphalt".to_string()),
                roof_age_years: Some(6),
                ..PropertyFacts::default()
            });
            Ok(lead)
        }
    }

    fn submitted() -> LeadRecord {
        LeadRecord {
            roof_age_years: Some(2),
            ..LeadRecord::default()
        }
    }

    #[tokio::test]
    async fn noop_returns_the_same_lead() {
        let lead = submitted();
        let enriched =
            enrich_with_fallback(&NoopEnricher, lead.clone(), Duration::from_secs(1)).await;
        assert_eq!(enriched, lead);
    }

    #[tokio::test]
    async fn failures_fall_back_to_submitted_lead() {
        let lead = submitted();
        let enriched =
            enrich_with_fallback(&FailingEnricher, lead.clone(), Duration::from_secs(1)).await;
        assert_eq!(enriched, lead);
    }

    #[tokio::test]
    async fn timeouts_fall_back_to_submitted_lead() {
        let lead = submitted();
        let enriched =
            enrich_with_fallback(&SlowEnricher, lead.clone(), Duration::from_millis(50)).await;
        assert_eq!(enriched, lead);
    }

    #[tokio::test]
    async fn enrichment_fills_only_missing_attributes() {
        let enriched =
            enrich_with_fallback(&ParcelEnricher, submitted(), Duration::from_secs(1)).await;
        assert_eq!(enriched.roof_type.as_deref(), Some("Asphalt"));
        assert_eq!(enriched.roof_age_years, Some(2));
    }
}
