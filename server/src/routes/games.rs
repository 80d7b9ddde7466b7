use axum::extract::{Query, State};
use axum::Json;
use database::models::{Game, GameDetail};
use serde::Deserialize;
use serde_json::{json, Value};
use types::GameStatus;

use super::require_id;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GameQuery {
    id: Option<String>,
}

pub async fn get_game(
    State(state): State<AppState>,
    Query(query): Query<GameQuery>,
) -> Result<Json<GameDetail>, ApiError> {
    let id = require_id(query.id.as_deref(), "Game")?;
    Ok(Json(state.store.get_game(id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameBody {
    #[serde(default)]
    player_names: Vec<String>,
}

pub async fn create_game(
    State(state): State<AppState>,
    Json(body): Json<CreateGameBody>,
) -> Result<Json<GameDetail>, ApiError> {
    Ok(Json(state.store.create_game(&body.player_names).await?))
}

#[derive(Debug, Deserialize)]
pub struct UpdateGameBody {
    status: String,
}

pub async fn update_game(
    State(state): State<AppState>,
    Query(query): Query<GameQuery>,
    Json(body): Json<UpdateGameBody>,
) -> Result<Json<Game>, ApiError> {
    let id = require_id(query.id.as_deref(), "Game")?;
    let status = body
        .status
        .parse::<GameStatus>()
        .map_err(|_| ApiError::bad_request(format!("Invalid status: {}", body.status)))?;
    Ok(Json(state.store.update_game_status(id, status).await?))
}

pub async fn delete_game(
    State(state): State<AppState>,
    Query(query): Query<GameQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = require_id(query.id.as_deref(), "Game")?;
    state.store.delete_game(id).await?;
    Ok(Json(json!({ "success": true })))
}
