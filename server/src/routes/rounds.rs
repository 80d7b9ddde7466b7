use axum::extract::State;
use axum::Json;
use database::models::{Brand, RoundDetail, RoundRoleDetail, RoundUpdate};
use serde::{Deserialize, Serialize};
use types::RoundStatus;

use super::require_id;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoundBody {
    game_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoundResponse {
    pub round: RoundDetail,
    pub brand: Brand,
}

pub async fn create_round(
    State(state): State<AppState>,
    Json(body): Json<CreateRoundBody>,
) -> Result<Json<CreateRoundResponse>, ApiError> {
    let game_id = require_id(body.game_id.as_deref(), "Game")?;
    let (round, brand) = state.store.create_round(game_id).await?;
    Ok(Json(CreateRoundResponse { round, brand }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoundBody {
    round_id: Option<String>,
    status: Option<String>,
    saboteur_won: Option<bool>,
}

pub async fn update_round(
    State(state): State<AppState>,
    Json(body): Json<UpdateRoundBody>,
) -> Result<Json<RoundDetail>, ApiError> {
    let round_id = require_id(body.round_id.as_deref(), "Round")?;
    let status = body
        .status
        .as_deref()
        .map(|raw| {
            raw.parse::<RoundStatus>()
                .map_err(|_| ApiError::bad_request(format!("Invalid status: {raw}")))
        })
        .transpose()?;

    let update = RoundUpdate {
        status,
        saboteur_won: body.saboteur_won,
    };
    Ok(Json(state.store.update_round(round_id, update).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealBody {
    round_role_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealResponse {
    pub round_role: RoundRoleDetail,
    pub all_revealed: bool,
}

pub async fn reveal_role(
    State(state): State<AppState>,
    Json(body): Json<RevealBody>,
) -> Result<Json<RevealResponse>, ApiError> {
    let id = require_id(body.round_role_id.as_deref(), "RoundRole")?;
    let (round_role, all_revealed) = state.store.reveal_role(id).await?;
    Ok(Json(RevealResponse {
        round_role,
        all_revealed,
    }))
}
