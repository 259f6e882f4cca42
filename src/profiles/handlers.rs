use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::repo::User,
    error::ApiError,
    profiles::{
        dto::{CreateProfileRequest, CreateProfileResponse},
        repo::BrandProfile,
    },
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/brand-profile", post(create_profile))
}

#[instrument(skip(state, payload))]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<Json<CreateProfileResponse>, ApiError> {
    if state.config.strict_profile_owner {
        ensure_owner_exists(&state, &payload.user_id).await?;
    }

    let profile = BrandProfile::create(
        &state.db,
        &payload.brand_name,
        &payload.industry,
        &payload.website_url,
        &payload.target_audience,
        &payload.monthly_ad_spend,
        &payload.user_id,
    )
    .await?;

    info!(profile_id = %profile.id, user_id = %profile.user_id, "brand profile created");
    Ok(Json(CreateProfileResponse {
        id: profile.id,
        message: "Brand profile created successfully",
    }))
}

/// Strict mode only: the submitted userId must name an existing user.
/// A string that isn't a uuid can't name one, so it fails the same way.
async fn ensure_owner_exists(state: &AppState, user_id: &str) -> Result<(), ApiError> {
    let parsed = match Uuid::parse_str(user_id) {
        Ok(id) => id,
        Err(_) => {
            warn!(user_id, "strict mode: userId is not a uuid");
            return Err(ApiError::NotFound("User not found"));
        }
    };
    if User::find_by_id(&state.db, parsed).await?.is_none() {
        warn!(user_id, "strict mode: no such user");
        return Err(ApiError::NotFound("User not found"));
    }
    Ok(())
}
