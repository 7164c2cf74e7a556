use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::adapters::inbound::serializer::parse_lyb_id;
use crate::modules::lybs::use_cases::delete_lyb::command::DeleteLyb;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let command = DeleteLyb {
        lyb_id: parse_lyb_id(&id)?,
        deleted_at: now_millis(),
    };
    let _write = state.write_lock.lock().await;
    let appended = state.delete_handler.handle(command).await?;
    state.projector.apply_appended(&appended).await?;
    Ok(StatusCode::NO_CONTENT)
}
