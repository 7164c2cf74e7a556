use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::adapters::inbound::serializer::parse_lyb_id;
use crate::modules::lybs::use_cases::delete_lyb::command::DeleteLyb;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteLybMutation;

#[Object]
impl DeleteLybMutation {
    async fn delete_lyb(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = DeleteLyb {
            lyb_id: parse_lyb_id(&id).map_err(ApiError::into_graphql)?,
            deleted_at: now_millis(),
        };
        let _write = state.write_lock.lock().await;
        let appended = state
            .delete_handler
            .handle(command)
            .await
            .map_err(|e| ApiError::from(e).into_graphql())?;
        state
            .projector
            .apply_appended(&appended)
            .await
            .map_err(|e| ApiError::from(e).into_graphql())?;
        Ok(true)
    }
}
