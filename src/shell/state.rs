use crate::modules::lybs::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::lybs::core::events::LybEvent;
use crate::modules::lybs::use_cases::delete_lyb::handler::DeleteLybHandler;
use crate::modules::lybs::use_cases::list_lybs::handler::Projector;
use crate::modules::lybs::use_cases::list_lybs::queries_port::LybQueries;
use crate::modules::lybs::use_cases::post_lyb::handler::PostLybHandler;
use crate::modules::lybs::use_cases::update_lyb::handler::UpdateLybHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type LybEventStore = InMemoryEventStore<LybEvent>;

pub const PROJECTOR_NAME: &str = "lyb_listing";

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn LybQueries + Send + Sync>,
    pub post_handler: Arc<PostLybHandler<LybEventStore>>,
    pub update_handler: Arc<UpdateLybHandler<LybEventStore>>,
    pub delete_handler: Arc<DeleteLybHandler<LybEventStore>>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
    pub max_page_size: u64,
    /// Held from append until the appended events are projected, so the read
    /// model sees writes in commit order.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        event_store: Arc<LybEventStore>,
        projections: Arc<InMemoryProjections>,
        max_page_size: u64,
    ) -> Self {
        let projector = Arc::new(Projector::new(
            PROJECTOR_NAME,
            projections.clone(),
            projections.clone(),
        ));
        Self {
            queries: projections,
            post_handler: Arc::new(PostLybHandler::new(event_store.clone())),
            update_handler: Arc::new(UpdateLybHandler::new(event_store.clone())),
            delete_handler: Arc::new(DeleteLybHandler::new(event_store)),
            projector,
            max_page_size,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Fresh in-memory stores, for local runs and tests.
    pub fn in_memory(max_page_size: u64) -> Self {
        Self::new(
            Arc::new(LybEventStore::new()),
            Arc::new(InMemoryProjections::new()),
            max_page_size,
        )
    }

    /// Caps an explicit page size at the configured maximum. Without one the
    /// whole listing is returned.
    pub fn page_limit(&self, requested: Option<u64>) -> Option<u64> {
        requested.map(|limit| limit.min(self.max_page_size))
    }
}

#[cfg(test)]
mod app_state_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(5), Some(5))]
    #[case(Some(500), Some(100))]
    #[case(Some(0), Some(0))]
    fn it_should_cap_explicit_page_limits(
        #[case] requested: Option<u64>,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(AppState::in_memory(100).page_limit(requested), expected);
    }
}
