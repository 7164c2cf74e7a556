use crate::modules::lybs::core::events::LybEvent;
use crate::modules::lybs::use_cases::execute::{
    Appended, ApplicationError, execute, stream_id_for,
};
use crate::modules::lybs::use_cases::update_lyb::command::UpdateLyb;
use crate::modules::lybs::use_cases::update_lyb::decide::decide_update;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct UpdateLybHandler<TEventStore>
where
    TEventStore: EventStore<LybEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> UpdateLybHandler<TEventStore>
where
    TEventStore: EventStore<LybEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, command: UpdateLyb) -> Result<Appended, ApplicationError> {
        let stream_id = stream_id_for(&command.lyb_id);
        let appended = execute(&*self.event_store, &stream_id, |state| {
            decide_update(state, command)
        })
        .await?;
        tracing::info!(stream_id = %stream_id, version = appended.starting_version + 1, "lyb updated");
        Ok(appended)
    }
}
