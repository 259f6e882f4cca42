use axum::{extract::Query, routing::get, Json, Router};
use tracing::instrument;

use crate::{
    competitors::{
        catalog,
        dto::{Competitor, RecommendationQuery, RecommendationResponse},
    },
    state::AppState,
};

pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/competitors/recommendations", get(recommendations))
}

#[instrument]
pub async fn recommendations(
    Query(query): Query<RecommendationQuery>,
) -> Json<RecommendationResponse> {
    let competitors = catalog::recommend(&query.industry)
        .iter()
        .map(Competitor::from)
        .collect();
    Json(RecommendationResponse { competitors })
}
