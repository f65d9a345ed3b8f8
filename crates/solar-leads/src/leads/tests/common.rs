use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;
use tokio::sync::Barrier;

use crate::config::EnrichmentConfig;
use crate::leads::domain::{LeadRecord, PropertyFacts};
use crate::leads::enrichment::{EnrichmentError, NoopEnricher, PropertyEnricher};
use crate::leads::service::LeadQualificationService;

/// Asphalt roof, new, full sun, big bill, prime credit, researcher.
pub(super) fn hot_lead() -> LeadRecord {
    LeadRecord {
        name: Some("Marisol Vega".to_string()),
        email: Some("marisol@example.com".to_string()),
        city: Some("Bakersfield".to_string()),
        state: Some("CA".to_string()),
        source: Some("Solar IQ".to_string()),
        roof_type: Some("Asphalt Shingle".to_string()),
        roof_age_years: Some(3),
        shading_level: Some("Full Sun".to_string()),
        hoa_allows_solar: Some("No HOA".to_string()),
        distance_minutes: Some(40),
        monthly_bill_raw: Some("$400–$600".to_string()),
        true_up_band: Some("$500+".to_string()),
        credit_band: Some("720+".to_string()),
        motivation: Some("Saving money and backup power".to_string()),
        decision_style: Some("Researches everything".to_string()),
        ..LeadRecord::default()
    }
}

/// Tile roof in full sun, $250 bill, large true-up, researcher: 80 / 80 / 75.
pub(super) fn qualified_lead() -> LeadRecord {
    LeadRecord {
        roof_type: Some("Concrete tile".to_string()),
        shading_level: Some("Full sun".to_string()),
        monthly_bill: Some(250.0),
        true_up_band: Some("500+".to_string()),
        decision_style: Some("Quality first".to_string()),
        ..LeadRecord::default()
    }
}

/// Asphalt roof with a $250 bill and nothing else: 75 / 60 / 50.
pub(super) fn nurture_lead() -> LeadRecord {
    LeadRecord {
        roof_type: Some("Asphalt".to_string()),
        monthly_bill_raw: Some("250".to_string()),
        ..LeadRecord::default()
    }
}

pub(super) fn service() -> Arc<LeadQualificationService<NoopEnricher>> {
    Arc::new(LeadQualificationService::new(
        Arc::new(NoopEnricher),
        EnrichmentConfig::default(),
    ))
}

pub(super) fn service_with<E>(enricher: E, timeout_ms: u64) -> LeadQualificationService<E>
where
    E: PropertyEnricher + 'static,
{
    LeadQualificationService::new(Arc::new(enricher), EnrichmentConfig { timeout_ms })
}

/// Supplies parcel data and counts how often it was consulted.
#[derive(Default)]
pub(super) struct ParcelLookup {
    pub(super) calls: AtomicUsize,
    pub(super) facts: PropertyFacts,
}

impl PropertyEnricher for ParcelLookup {
    async fn enrich(&self, mut lead: LeadRecord) -> Result<LeadRecord, EnrichmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        lead.fill_missing_property_facts(self.facts.clone());
        Ok(lead)
    }
}

pub(super) struct StalledLookup;

impl PropertyEnricher for StalledLookup {
    async fn enrich(&self, mut lead: LeadRecord) -> Result<LeadRecord, EnrichmentError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        lead.roof_type = Some("Wood shake".to_string());
        Ok(lead)
    }
}

/// Holds every lookup until `parties` of them are in flight at once.
pub(super) struct RendezvousLookup {
    pub(super) barrier: Barrier,
}

impl RendezvousLookup {
    pub(super) fn new(parties: usize) -> Self {
        Self {
            barrier: Barrier::new(parties),
        }
    }
}

impl PropertyEnricher for RendezvousLookup {
    async fn enrich(&self, mut lead: LeadRecord) -> Result<LeadRecord, EnrichmentError> {
        self.barrier.wait().await;
        lead.fill_missing_property_facts(PropertyFacts {
            roof_type: Some("Wood shake".to_string()),
            ..PropertyFacts::default()
        });
        Ok(lead)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}
