use axum::{
    routing::{get, post},
    Json, Router,
};

use super::aggregate::{assess, GrantAssessment};
use super::domain::{GrantApplication, Household};
use super::eligibility::{assess_eligibility, EligibilityDecision};
use super::views::CatalogView;

/// Router builder exposing the catalog, tier lookup, and full assessment endpoints.
///
/// Every handler is a pure computation over the request body, so the router carries no state.
pub fn grant_router() -> Router {
    Router::new()
        .route("/api/v1/grants/catalog", get(catalog_handler))
        .route("/api/v1/grants/tier", post(tier_handler))
        .route("/api/v1/grants/assessment", post(assessment_handler))
}

pub(crate) async fn catalog_handler() -> Json<CatalogView> {
    Json(CatalogView::standard())
}

pub(crate) async fn tier_handler(Json(household): Json<Household>) -> Json<EligibilityDecision> {
    Json(assess_eligibility(&household))
}

pub(crate) async fn assessment_handler(
    Json(application): Json<GrantApplication>,
) -> Json<GrantAssessment> {
    Json(assess(&application))
}
