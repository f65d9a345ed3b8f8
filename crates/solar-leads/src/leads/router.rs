use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use super::domain::{LeadRecord, LeadScore};
use super::enrichment::PropertyEnricher;
use super::service::LeadQualificationService;

/// Router builder exposing the lead scoring endpoints.
pub fn lead_router<E>(service: Arc<LeadQualificationService<E>>) -> Router
where
    E: PropertyEnricher + 'static,
{
    Router::new()
        .route("/score-lead", post(score_handler::<E>))
        .route("/score-leads", post(batch_handler::<E>))
        .with_state(service)
}

pub(crate) async fn score_handler<E>(
    State(service): State<Arc<LeadQualificationService<E>>>,
    Json(lead): Json<LeadRecord>,
) -> Json<LeadScore>
where
    E: PropertyEnricher + 'static,
{
    Json(service.qualify(lead).await)
}

pub(crate) async fn batch_handler<E>(
    State(service): State<Arc<LeadQualificationService<E>>>,
    Json(leads): Json<Vec<LeadRecord>>,
) -> Json<Vec<LeadScore>>
where
    E: PropertyEnricher + 'static,
{
    Json(service.qualify_batch(leads).await)
}
