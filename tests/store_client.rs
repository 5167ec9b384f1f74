//! HTTP contract of the item store client against a mock server.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{item, sample_items};
use skinmarket::catalog::{ItemDraft, Rarity, PLACEHOLDER_IMAGE};
use skinmarket::store::{ItemStoreClient, StoreError};

const LIST_BODY: &str = r#"[
    {"id": 1, "name": "Огненный дракон", "weapon": "AK-47", "rarity": "legendary",
     "price": 12500, "image_url": "/placeholder.svg",
     "created_at": "2025-10-25T10:00:00", "updated_at": "2025-10-25T10:00:00"},
    {"id": 2, "name": "Пустынный камуфляж", "weapon": "Болтовка", "rarity": "rare",
     "price": 3200, "image_url": "/placeholder.svg"},
    {"id": 3, "name": "Металлическая броня", "weapon": "Кофейная броня", "rarity": "uncommon",
     "price": 850},
    {"id": 4, "name": "Ржавый меч", "weapon": "Меч", "rarity": "common",
     "price": 450, "image_url": "/placeholder.svg"}
]"#;

fn client_for(backend: &MockBackend) -> ItemStoreClient {
    ItemStoreClient::new(&backend.items_url()).expect("mock URL is valid")
}

#[tokio::test]
async fn list_decodes_items_in_server_order() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::json(LIST_BODY)).await;

    let items = client_for(&backend).list().await.unwrap();

    assert_eq!(items, sample_items());
    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/items");
    assert_eq!(requests[0].query, None);
}

#[tokio::test]
async fn missing_image_url_defaults_to_placeholder() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"id": 9, "name": "x", "weapon": "y", "rarity": "rare", "price": 1}]"#,
        ))
        .await;

    let items = client_for(&backend).list().await.unwrap();
    assert_eq!(items[0].image_url, PLACEHOLDER_IMAGE);
}

#[tokio::test]
async fn create_posts_integer_price() {
    let backend = MockBackend::start().await;
    let mut created = MockResponse::json(r#"{"id": 5}"#);
    created.status = 201;
    backend.enqueue_response(created).await;

    let draft = ItemDraft {
        name: "Test".into(),
        weapon: "AK-47".into(),
        rarity: Rarity::Rare,
        price: 100,
        image_url: PLACEHOLDER_IMAGE.into(),
    };
    client_for(&backend).create(&draft).await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    let body = requests[0].json();
    assert_eq!(body["name"], "Test");
    assert_eq!(body["weapon"], "AK-47");
    assert_eq!(body["rarity"], "rare");
    assert_eq!(body["price"], serde_json::json!(100));
    assert!(body["price"].is_i64());
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn update_puts_full_record_with_id() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::json("{}")).await;

    let skin = item(2, "Пустынный камуфляж", "Болтовка", Rarity::Legendary, 3_500);
    client_for(&backend).update(&skin).await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    let body = requests[0].json();
    assert_eq!(body["id"], 2);
    assert_eq!(body["rarity"], "legendary");
    assert_eq!(body["price"], 3_500);
    assert_eq!(body["image_url"], PLACEHOLDER_IMAGE);
}

#[tokio::test]
async fn delete_sends_id_as_query_parameter() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::json("{}")).await;

    client_for(&backend).delete(3).await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/items");
    assert_eq!(requests[0].query.as_deref(), Some("id=3"));
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(500, "boom"))
        .await;

    let err = client_for(&backend).list().await.unwrap_err();
    assert!(matches!(err, StoreError::Status { status: 500 }));
    assert_eq!(err.user_message(), "server returned 500");
}

#[tokio::test]
async fn mutation_rejection_is_an_error() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::status(404)).await;

    let err = client_for(&backend).delete(77).await.unwrap_err();
    assert!(matches!(err, StoreError::Status { status: 404 }));
}

#[tokio::test]
async fn unknown_rarity_fails_decoding() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"id": 1, "name": "x", "weapon": "y", "rarity": "mythic", "price": 1}]"#,
        ))
        .await;

    let err = client_for(&backend).list().await.unwrap_err();
    assert!(matches!(err, StoreError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = ItemStoreClient::new(&format!("http://{addr}/items")).unwrap();

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, StoreError::Network { .. }));
    assert_eq!(err.user_message(), "server unreachable");
}
