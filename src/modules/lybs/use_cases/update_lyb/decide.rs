use crate::modules::lybs::core::decision::{DecideError, Decision};
use crate::modules::lybs::core::events::{LybEvent, v1::lyb_updated::LybUpdatedV1};
use crate::modules::lybs::core::rules::{LybFields, validate};
use crate::modules::lybs::core::state::LybState;
use crate::modules::lybs::use_cases::update_lyb::command::UpdateLyb;

pub fn decide_update(state: &LybState, command: UpdateLyb) -> Decision {
    let LybState::Posted {
        lyb_id,
        title,
        author,
        content,
        ..
    } = state
    else {
        return Decision::reject(DecideError::NotFound);
    };

    let changes = command.changes;
    let merged = LybFields {
        title: changes.title.unwrap_or_else(|| title.clone()),
        author: changes.author.unwrap_or_else(|| author.clone()),
        content: changes.content.unwrap_or_else(|| content.clone()),
    };
    match validate(merged) {
        Ok(fields) => Decision::accept(LybEvent::LybUpdatedV1(LybUpdatedV1 {
            lyb_id: lyb_id.clone(),
            title: fields.title,
            author: fields.author,
            content: fields.content,
            updated_at: command.updated_at,
        })),
        Err(errors) => Decision::reject(DecideError::Invalid(errors)),
    }
}
