// Shared write flow for Lyb commands.
//
// Load the stream, fold it into state, let the use case decide, then append the
// accepted events at the loaded version.

use crate::modules::lybs::core::decision::{DecideError, Decision};
use crate::modules::lybs::core::events::LybEvent;
use crate::modules::lybs::core::evolve::evolve;
use crate::modules::lybs::core::state::LybState;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}

/// Events written by one accepted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appended {
    pub stream_id: String,
    pub starting_version: i64,
    pub events: Vec<LybEvent>,
}

pub fn stream_id_for(lyb_id: &str) -> String {
    format!("Lyb-{lyb_id}")
}

pub async fn execute<TEventStore>(
    event_store: &TEventStore,
    stream_id: &str,
    decide: impl FnOnce(&LybState) -> Decision,
) -> Result<Appended, ApplicationError>
where
    TEventStore: EventStore<LybEvent> + ?Sized,
{
    let stream = event_store.load(stream_id).await?;
    let state = stream.fold(LybState::None, evolve);

    match decide(&state) {
        Decision::Accepted { events } => {
            event_store
                .append(stream_id, stream.version, &events)
                .await?;
            Ok(Appended {
                stream_id: stream_id.to_string(),
                starting_version: stream.version,
                events,
            })
        }
        Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
    }
}
