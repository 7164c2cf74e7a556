use async_graphql::{Context, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::use_cases::list_lybs::inbound::graphql::GqlLyb;
use crate::modules::lybs::use_cases::post_lyb::command::PostLyb;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct PostLybMutation;

#[Object]
impl PostLybMutation {
    async fn post_lyb(
        &self,
        context: &Context<'_>,
        title: String,
        author: String,
        content: String,
    ) -> GqlResult<GqlLyb> {
        let state = context.data_unchecked::<AppState>();
        let lyb_id = Uuid::now_v7().to_string();
        let command = PostLyb {
            lyb_id: lyb_id.clone(),
            title,
            author,
            content,
            posttime: now_millis(),
        };

        let _write = state.write_lock.lock().await;

        let appended = state
            .post_handler
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
