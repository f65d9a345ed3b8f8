use metrics_exporter_prometheus::PrometheusHandle;
use solar_leads::config::EnrichmentConfig;
use solar_leads::leads::{LeadQualificationService, NoopEnricher};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// No property data provider is wired in yet, so leads are scored as submitted.
pub(crate) fn default_qualification_service(
    config: EnrichmentConfig,
) -> Arc<LeadQualificationService<NoopEnricher>> {
    Arc::new(LeadQualificationService::new(Arc::new(NoopEnricher), config))
}
