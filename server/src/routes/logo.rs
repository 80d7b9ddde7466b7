use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LogoQuery {
    domain: Option<String>,
}

/// Build a logo.dev image URL for a brand domain. The token never reaches
/// the client directly; the UI only ever sees the assembled URL.
pub async fn logo_url(
    State(state): State<AppState>,
    Query(query): Query<LogoQuery>,
) -> Result<Json<Value>, ApiError> {
    let domain = query
        .domain
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::bad_request("Domain required"))?;

    let token = state
        .logo_token
        .as_deref()
        .ok_or_else(|| ApiError::internal("LogoDev API key not configured"))?;

    Ok(Json(json!({
        "logoUrl": format!("https://img.logo.dev/{domain}?token={token}")
    })))
}
