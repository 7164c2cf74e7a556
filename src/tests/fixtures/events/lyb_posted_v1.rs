use crate::modules::lybs::core::events::v1::lyb_posted::LybPostedV1;
use crate::tests::fixtures::commands::post_lyb::PostLybBuilder;

/// Canonical posted event for tests.
pub fn make_lyb_posted_v1_event() -> LybPostedV1 {
    let command = PostLybBuilder::new().build();
    LybPostedV1 {
        lyb_id: command.lyb_id,
        title: command.title,
        author: command.author,
        content: command.content,
        posttime: command.posttime,
    }
}
