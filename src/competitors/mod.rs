use crate::state::AppState;
use axum::Router;

pub mod catalog;
mod dto;
pub mod handlers;

pub fn router() -> Router<AppState> {
    handlers::recommendation_routes()
}
