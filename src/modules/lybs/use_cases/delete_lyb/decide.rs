use crate::modules::lybs::core::decision::{DecideError, Decision};
use crate::modules::lybs::core::events::{LybEvent, v1::lyb_deleted::LybDeletedV1};
use crate::modules::lybs::core::state::LybState;
use crate::modules::lybs::use_cases::delete_lyb::command::DeleteLyb;

pub fn decide_delete(state: &LybState, command: DeleteLyb) -> Decision {
    match state {
        LybState::Posted { lyb_id, .. } => Decision::accept(LybEvent::LybDeletedV1(LybDeletedV1 {
            lyb_id: lyb_id.clone(),
            deleted_at: command.deleted_at,
        })),
        LybState::None | LybState::Deleted { .. } => Decision::reject(DecideError::NotFound),
    }
}
