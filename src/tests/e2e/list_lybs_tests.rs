use crate::modules::lybs::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::lybs::core::events::LybEvent;
use crate::modules::lybs::use_cases::delete_lyb::command::DeleteLyb;
use crate::modules::lybs::use_cases::delete_lyb::handler::DeleteLybHandler;
use crate::modules::lybs::use_cases::list_lybs::handler::Projector;
use crate::modules::lybs::use_cases::list_lybs::queries_port::LybQueries;
use crate::modules::lybs::use_cases::post_lyb::handler::PostLybHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::tests::fixtures::commands::post_lyb::PostLybBuilder;
use std::sync::Arc;

#[tokio::test]
async fn lists_lybs_newest_first() {
    let store = Arc::new(InMemoryEventStore::<LybEvent>::new());
    let projections = Arc::new(InMemoryProjections::new());
    let projector = Projector::new("lyb_listing", projections.clone(), projections.clone());
    let handler = PostLybHandler::new(store.clone());

    let commands: Vec<_> = [1000, 3000, 2000]
        .into_iter()
        .map(|posttime| {
            PostLybBuilder::new()
                .lyb_id(format!("lyb-{posttime}"))
                .posttime(posttime)
                .build()
        })
        .collect();

    for command in commands.iter().cloned() {
        let appended = handler.handle(command).await.unwrap();
        projector.apply_appended(&appended).await.unwrap();
    }

    let list = projections.list(0, None).await.unwrap();

    let ids: Vec<_> = list.iter().map(|l| l.lyb_id.as_str()).collect();
    assert_eq!(ids, vec!["lyb-3000", "lyb-2000", "lyb-1000"]);
    assert_eq!(list[0].posttime, commands[1].posttime);

    let page = projections.list(1, Some(1)).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].lyb_id, "lyb-2000");
}

#[tokio::test]
async fn deleted_lybs_drop_out_of_the_listing() {
    let store = Arc::new(InMemoryEventStore::<LybEvent>::new());
    let projections = Arc::new(InMemoryProjections::new());
    let projector = Projector::new("lyb_listing", projections.clone(), projections.clone());
    let post = PostLybHandler::new(store.clone());
    let delete = DeleteLybHandler::new(store.clone());

    for id in ["lyb-a", "lyb-b"] {
        let appended = post
            .handle(PostLybBuilder::new().lyb_id(id).build())
            .await
            .unwrap();
        projector.apply_appended(&appended).await.unwrap();
    }

    let appended = delete
        .handle(DeleteLyb {
            lyb_id: "lyb-a".into(),
            deleted_at: 1_700_000_100_000,
        })
        .await
        .unwrap();
    projector.apply_appended(&appended).await.unwrap();

    let list = projections.list(0, None).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].lyb_id, "lyb-b");
    assert!(projections.find_by_id("lyb-a").await.unwrap().is_none());
}
