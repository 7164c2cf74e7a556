use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::adapters::inbound::serializer::{LybRepresentation, parse_lyb_id};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LybRepresentation>, ApiError> {
    let lyb_id = parse_lyb_id(&id)?;
    let view = state
        .queries
        .find_by_id(&lyb_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(view.into()))
}
