use crate::modules::lybs::core::events::LybEvent;
use crate::modules::lybs::core::state::LybState;

pub fn evolve(state: LybState, event: LybEvent) -> LybState {
    match (state, event) {
        (LybState::None, LybEvent::LybPostedV1(e)) => LybState::Posted {
            lyb_id: e.lyb_id,
            title: e.title,
            author: e.author,
            content: e.content,
            posttime: e.posttime,
            updated_at: e.posttime,
        },
        (LybState::Posted { posttime, .. }, LybEvent::LybUpdatedV1(e)) => LybState::Posted {
            lyb_id: e.lyb_id,
            title: e.title,
            author: e.author,
            content: e.content,
            posttime,
            updated_at: e.updated_at,
        },
        (LybState::Posted { .. }, LybEvent::LybDeletedV1(e)) => LybState::Deleted {
            lyb_id: e.lyb_id,
            deleted_at: e.deleted_at,
        },
        (state, _) => state,
    }
}
