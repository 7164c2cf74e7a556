// Event store port.
//
// Streams are append-only. Appends carry the version the writer loaded; a stream
// that moved on in the meantime rejects the append with VersionMismatch.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("version mismatch on {stream_id}: expected {expected}, actual {actual}")]
    VersionMismatch {
        stream_id: String,
        expected: i64,
        actual: i64,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    pub events: Vec<E>,
    pub version: i64,
}

impl<E: Clone> LoadedStream<E> {
    /// Replays the stream on top of `initial`.
    pub fn fold<S>(&self, initial: S, evolve: impl Fn(S, E) -> S) -> S {
        self.events.iter().cloned().fold(initial, evolve)
    }
}

#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;
    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError>;
}

pub mod in_memory;
