//! End-to-end admin scenarios driven through key presses.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{drain, make_app, press, press_ctrl, sample_items, type_text};
use crossterm::event::KeyCode;
use skinmarket::catalog::{ItemDraft, Rarity, PLACEHOLDER_IMAGE};
use skinmarket::store::ItemStoreClient;
use skinmarket::ui::notify::Level;
use skinmarket::ui::worker::{execute, Mutation, StoreEvent, UiCommand};
use skinmarket::ui::Page;

fn test_draft() -> ItemDraft {
    ItemDraft {
        name: "Test".into(),
        weapon: "AK-47".into(),
        rarity: Rarity::Rare,
        price: 100,
        image_url: PLACEHOLDER_IMAGE.into(),
    }
}

#[test]
fn create_flow_sends_draft_then_refetches() {
    let (mut app, mut rx) = make_app(Page::Admin);
    assert_eq!(drain(&mut rx), vec![UiCommand::FetchItems]);
    app.on_store_event(StoreEvent::ItemsLoaded(sample_items()));

    press(&mut app, KeyCode::Char('n'));
    assert!(app.editor().is_open());
    assert_eq!(app.editor().editing_id(), None);

    type_text(&mut app, "Test");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "AK-47");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "100");
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        drain(&mut rx),
        vec![UiCommand::CreateItem {
            draft: test_draft(),
            ticket: 1,
        }]
    );
    // Still open until the store answers.
    assert!(app.editor().is_open());

    app.on_store_event(StoreEvent::MutationSucceeded(Mutation::Create { ticket: 1 }));
    assert!(!app.editor().is_open());
    assert_eq!(drain(&mut rx), vec![UiCommand::FetchItems]);
    let note = app.notifications().latest().unwrap();
    assert_eq!(note.level, Level::Success);
    assert_eq!(note.message, "Skin added");
}

#[test]
fn missing_price_keeps_dialog_open_with_warning() {
    let (mut app, mut rx) = make_app(Page::Admin);
    drain(&mut rx);

    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Test");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "AK-47");
    press(&mut app, KeyCode::Enter);

    assert!(drain(&mut rx).is_empty());
    assert!(app.editor().is_open());
    assert_eq!(app.notifications().latest().unwrap().level, Level::Warning);
}

#[test]
fn escape_discards_edits() {
    let (mut app, mut rx) = make_app(Page::Admin);
    drain(&mut rx);
    app.on_store_event(StoreEvent::ItemsLoaded(sample_items()));

    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " v2");
    press(&mut app, KeyCode::Esc);

    assert!(!app.editor().is_open());
    assert!(drain(&mut rx).is_empty());
    assert_eq!(app.items(), sample_items().as_slice());
}

#[test]
fn edit_sends_update_for_selected_row() {
    let (mut app, mut rx) = make_app(Page::Admin);
    drain(&mut rx);
    app.on_store_event(StoreEvent::ItemsLoaded(sample_items()));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.editor().editing_id(), Some(2));

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    let mut expected = sample_items()[1].clone();
    expected.rarity = Rarity::Legendary;
    assert_eq!(
        drain(&mut rx),
        vec![UiCommand::UpdateItem {
            item: expected,
            ticket: 1,
        }]
    );
}

#[test]
fn late_create_success_does_not_close_later_edit() {
    let (mut app, mut rx) = make_app(Page::Admin);
    drain(&mut rx);
    app.on_store_event(StoreEvent::ItemsLoaded(sample_items()));

    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Test");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "AK-47");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "100");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert!(!app.editor().is_open());

    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " unsaved");

    app.on_store_event(StoreEvent::MutationSucceeded(Mutation::Create { ticket: 1 }));

    assert!(app.editor().is_open());
    assert_eq!(app.editor().editing_id(), Some(1));
    assert_eq!(app.editor().form().unwrap().name, "Огненный дракон unsaved");
    // The stale success still refreshes the list.
    let commands = drain(&mut rx);
    assert_eq!(commands.last(), Some(&UiCommand::FetchItems));
}

#[test]
fn enter_while_saving_sends_one_create() {
    let (mut app, mut rx) = make_app(Page::Admin);
    drain(&mut rx);

    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Test");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "AK-47");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "100");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    assert_eq!(drain(&mut rx).len(), 1);
    assert!(app.editor().is_saving());

    // A rejected save unfreezes the form so it can be retried.
    app.on_store_event(StoreEvent::MutationFailed {
        mutation: Mutation::Create { ticket: 1 },
        message: "server returned 500".into(),
    });
    assert!(!app.editor().is_saving());
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        drain(&mut rx),
        vec![UiCommand::CreateItem {
            draft: ItemDraft {
                rarity: Rarity::Common,
                ..test_draft()
            },
            ticket: 2,
        }]
    );
}

#[test]
fn delete_requires_confirmation() {
    let (mut app, mut rx) = make_app(Page::Admin);
    drain(&mut rx);
    app.on_store_event(StoreEvent::ItemsLoaded(sample_items()));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));
    assert!(app.confirm().is_visible());
    assert_eq!(app.confirm().pending_id(), Some(3));
    assert!(drain(&mut rx).is_empty());

    press(&mut app, KeyCode::Char('n'));
    assert!(!app.confirm().is_visible());
    assert!(drain(&mut rx).is_empty());

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert!(!app.confirm().is_visible());
    assert_eq!(drain(&mut rx), vec![UiCommand::DeleteItem(3)]);

    app.on_store_event(StoreEvent::MutationSucceeded(Mutation::Delete));
    assert_eq!(drain(&mut rx), vec![UiCommand::FetchItems]);
}

#[test]
fn fetch_failure_notifies_once_and_keeps_list() {
    let (mut app, mut rx) = make_app(Page::Catalog);
    drain(&mut rx);

    app.on_store_event(StoreEvent::FetchFailed("server returned 500".into()));

    assert_eq!(app.notifications().len(), 1);
    let note = app.notifications().latest().unwrap();
    assert_eq!(note.level, Level::Error);
    assert_eq!(note.message, "Failed to load skins: server returned 500");
    assert!(app.items().is_empty());
    assert!(!app.is_loading());

    app.on_store_event(StoreEvent::ItemsLoaded(sample_items()));
    app.on_store_event(StoreEvent::FetchFailed("server unreachable".into()));
    assert_eq!(app.items().len(), 4);
}

#[test]
fn failed_save_keeps_form_contents() {
    let (mut app, mut rx) = make_app(Page::Admin);
    drain(&mut rx);

    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Test");
    app.on_store_event(StoreEvent::MutationFailed {
        mutation: Mutation::Create { ticket: 1 },
        message: "server returned 400".into(),
    });

    assert_eq!(app.editor().form().unwrap().name, "Test");
    assert_eq!(
        app.notifications().latest().unwrap().message,
        "Failed to save skin: server returned 400"
    );
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn search_and_filters_drive_visible_rows() {
    let (mut app, mut rx) = make_app(Page::Catalog);
    drain(&mut rx);
    app.on_store_event(StoreEvent::ItemsLoaded(sample_items()));

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "МЕЧ");
    press(&mut app, KeyCode::Enter);
    let visible = app.visible_items(Page::Catalog);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 4);

    // Typing no longer edits the query once search mode ends.
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.browse(Page::Catalog).filter.query, "МЕЧ");

    // Admin keeps its own filter.
    assert_eq!(app.visible_items(Page::Admin).len(), 4);
}

#[test]
fn page_switching_fetches_list_pages() {
    let (mut app, mut rx) = make_app(Page::Home);
    assert!(drain(&mut rx).is_empty());

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.page(), Page::Cart);
    assert!(drain(&mut rx).is_empty());

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.page(), Page::Catalog);
    assert_eq!(drain(&mut rx), vec![UiCommand::FetchItems]);

    press_ctrl(&mut app, 'r');
    assert_eq!(drain(&mut rx), vec![UiCommand::FetchItems]);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.page(), Page::Home);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn worker_round_trip_against_mock_store() {
    let backend = MockBackend::start().await;
    let client = ItemStoreClient::new(&backend.items_url()).unwrap();

    let mut created = MockResponse::json(r#"{"id": 5}"#);
    created.status = 201;
    backend.enqueue_response(created).await;
    let command = UiCommand::CreateItem {
        draft: test_draft(),
        ticket: 7,
    };
    let event = execute(&client, command).await;
    assert_eq!(event, StoreEvent::MutationSucceeded(Mutation::Create { ticket: 7 }));

    backend.enqueue_response(MockResponse::status(500)).await;
    let event = execute(&client, UiCommand::DeleteItem(3)).await;
    assert_eq!(
        event,
        StoreEvent::MutationFailed {
            mutation: Mutation::Delete,
            message: "server returned 500".into(),
        }
    );

    backend.enqueue_response(MockResponse::status(503)).await;
    let event = execute(&client, UiCommand::FetchItems).await;
    assert_eq!(event, StoreEvent::FetchFailed("server returned 503".into()));
}
