use axum::extract::State;
use axum::Json;
use database::models::Brand;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_brands(State(state): State<AppState>) -> Result<Json<Vec<Brand>>, ApiError> {
    Ok(Json(state.store.all_brands().await?))
}
