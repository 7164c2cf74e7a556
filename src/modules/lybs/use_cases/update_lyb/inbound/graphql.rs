use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::adapters::inbound::serializer::parse_lyb_id;
use crate::modules::lybs::use_cases::list_lybs::inbound::graphql::GqlLyb;
use crate::modules::lybs::use_cases::update_lyb::command::{LybChanges, UpdateLyb};
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateLybMutation;

#[Object]
impl UpdateLybMutation {
    /// Changes only the arguments that are given.
    async fn update_lyb(
        &self,
        context: &Context<'_>,
        id: ID,
        title: Option<String>,
        author: Option<String>,
        content: Option<String>,
    ) -> GqlResult<GqlLyb> {
        let state = context.data_unchecked::<AppState>();
        let lyb_id = parse_lyb_id(&id).map_err(ApiError::into_graphql)?;
        let command = UpdateLyb {
            lyb_id: lyb_id.clone(),
            changes: LybChanges {
                title,
                author,
                content,
            },
            updated_at: now_millis(),
        };

        let _write = state.write_lock.lock().await;

        let appended = state
            .update_handler
            .handle(command)
            .await
            .map_err(|e| ApiError::from(e).into_graphql())?;
        state
            .projector
            .apply_appended(&appended)
            .await
            .map_err(|e| ApiError::from(e).into_graphql())?;

        state
            .queries
            .find_by_id(&lyb_id)
            .await
            .map_err(|e| ApiError::from(e).into_graphql())?
            .map(Into::into)
            .ok_or_else(|| ApiError::NotFound.into_graphql())
    }
}
