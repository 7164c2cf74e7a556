use crate::modules::lybs::core::decision::{DecideError, Decision};
use crate::modules::lybs::core::events::{LybEvent, v1::lyb_posted::LybPostedV1};
use crate::modules::lybs::core::rules::{LybFields, validate};
use crate::modules::lybs::core::state::LybState;
use crate::modules::lybs::use_cases::post_lyb::command::PostLyb;

pub fn decide_post(state: &LybState, command: PostLyb) -> Decision {
    match state {
        LybState::None => {
            let fields = match validate(LybFields {
                title: command.title,
                author: command.author,
                content: command.content,
            }) {
                Ok(fields) => fields,
                Err(errors) => return Decision::reject(DecideError::Invalid(errors)),
            };
            Decision::accept(LybEvent::LybPostedV1(LybPostedV1 {
                lyb_id: command.lyb_id,
                title: fields.title,
                author: fields.author,
                content: fields.content,
                posttime: command.posttime,
            }))
        }
        _ => Decision::reject(DecideError::AlreadyExists),
    }
}
