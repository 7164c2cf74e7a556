// Translate a domain event into read model mutations.
//
// last_event_id is "stream_id:version" of the event that produced the mutation.
// Every mutation carries that version so stores can drop ones that arrive late.

use crate::modules::lybs::core::events::LybEvent;
use crate::modules::lybs::use_cases::list_lybs::projection::{LybRow, LybRowPatch};

#[derive(Debug, PartialEq, Eq)]
pub enum Mutation {
    Upsert(LybRow),
    Patch(LybRowPatch),
    Remove { lyb_id: String, version: i64 },
}

pub fn apply(stream_id: &str, version: i64, event: &LybEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        LybEvent::LybPostedV1(details) => vec![Mutation::Upsert(LybRow {
            lyb_id: details.lyb_id.clone(),
            title: details.title.clone(),
            author: details.author.clone(),
            content: details.content.clone(),
            posttime: details.posttime,
            updated_at: details.posttime,
            version,
            last_event_id: Some(stream_key),
        })],
        LybEvent::LybUpdatedV1(details) => vec![Mutation::Patch(LybRowPatch {
            lyb_id: details.lyb_id.clone(),
            title: details.title.clone(),
            author: details.author.clone(),
            content: details.content.clone(),
            updated_at: details.updated_at,
            version,
            last_event_id: stream_key,
        })],
        LybEvent::LybDeletedV1(details) => vec![Mutation::Remove {
            lyb_id: details.lyb_id.clone(),
            version,
        }],
    }
}
