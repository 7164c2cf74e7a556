use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::adapters::inbound::serializer::{LybInput, LybRepresentation};
use crate::modules::lybs::use_cases::post_lyb::command::PostLyb;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LybInput>, JsonRejection>,
) -> Result<(StatusCode, Json<LybRepresentation>), ApiError> {
    let Json(body) = body?;
    let fields = body.require_all().map_err(ApiError::Invalid)?;

    let lyb_id = Uuid::now_v7().to_string();
    let command = PostLyb {
        lyb_id: lyb_id.clone(),
        title: fields.title,
        author: fields.author,
        content: fields.content,
        posttime: now_millis(),
    };

    let _write = state.write_lock.lock().await;

    let appended = state.post_handler.handle(command).await?;
    // Inline projection so reads see the new row immediately
    state.projector.apply_appended(&appended).await?;

    let view = state
        .queries
        .find_by_id(&lyb_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("posted lyb {lyb_id} missing from projection"))?;
    Ok((StatusCode::CREATED, Json(view.into())))
}
