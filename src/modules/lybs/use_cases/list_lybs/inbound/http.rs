use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::adapters::inbound::serializer::LybRepresentation;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListLybsParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListLybsParams>, QueryRejection>,
) -> Result<Json<Vec<LybRepresentation>>, ApiError> {
    let Query(params) = params?;
    let lybs = state
        .queries
        .list(params.offset.unwrap_or(0), state.page_limit(params.limit))
        .await?;
    Ok(Json(lybs.into_iter().map(Into::into).collect()))
}
