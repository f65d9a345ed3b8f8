use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::info;

use super::domain::{LeadRecord, LeadScore};
use super::enrichment::{enrich_with_fallback, PropertyEnricher};
use super::scoring::LeadScoringEngine;
use crate::config::EnrichmentConfig;

/// Service composing the enrichment hook and the scoring engine.
pub struct LeadQualificationService<E> {
    enricher: Arc<E>,
    engine: LeadScoringEngine,
    enrichment_timeout: Duration,
}

impl<E> LeadQualificationService<E>
where
    E: PropertyEnricher + 'static,
{
    pub fn new(enricher: Arc<E>, config: EnrichmentConfig) -> Self {
        Self {
            enricher,
            engine: LeadScoringEngine::new(),
            enrichment_timeout: config.timeout(),
        }
    }

    /// Enrich (best-effort) and score a single lead.
    pub async fn qualify(&self, lead: LeadRecord) -> LeadScore {
        let lead =
            enrich_with_fallback(self.enricher.as_ref(), lead, self.enrichment_timeout).await;
        let score = self.engine.score(&lead);

        info!(
            tier = %score.ai_tier,
            buyer_type = %score.buyer_type,
            reject_reasons = score.reject_reasons.len(),
            source = lead.source.as_deref().unwrap_or("unknown"),
            "lead qualified"
        );

        score
    }

    /// Leads are enriched concurrently; scores come back in submission order.
    pub async fn qualify_batch(&self, leads: Vec<LeadRecord>) -> Vec<LeadScore> {
        join_all(leads.into_iter().map(|lead| self.qualify(lead))).await
    }
}
