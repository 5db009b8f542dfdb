use serde_json::{json, Value};

use showcase_store::api::{dispatch, Method, Response};
use showcase_store::MemoryStore;

async fn seeded() -> MemoryStore {
    MemoryStore::seeded().await.unwrap()
}

async fn send(store: &MemoryStore, method: Method, path: &str, body: Option<Value>) -> Response {
    dispatch(store, method, path, body).await
}

#[tokio::test]
async fn test_public_and_management_listings() {
    let store = seeded().await;

    let public = send(&store, Method::Get, "/api/acts", None).await;
    assert_eq!(public.status, 200);
    assert_eq!(public.body.as_array().map(Vec::len), Some(8));

    send(&store, Method::Patch, "/api/acts/kings-gambit/toggle", Some(json!({ "active": false }))).await;

    let public = send(&store, Method::Get, "/api/acts", None).await;
    assert_eq!(public.body.as_array().map(Vec::len), Some(7));
    let manage = send(&store, Method::Get, "/api/acts/manage", None).await;
    assert_eq!(manage.body.as_array().map(Vec::len), Some(8));

    let single = send(&store, Method::Get, "/api/acts/kings-gambit", None).await;
    assert_eq!(single.status, 200);
    assert_eq!(single.body["title"], "Kings Gambit");
    assert_eq!(single.body["isActive"], false);
}

#[tokio::test]
async fn test_unknown_routes_and_ids_are_not_found() {
    let store = seeded().await;

    assert_eq!(send(&store, Method::Get, "/api/users", None).await.status, 404);
    assert_eq!(send(&store, Method::Get, "/acts", None).await.status, 404);
    assert_eq!(send(&store, Method::Get, "/api/achievements/abc", None).await.status, 404);
    assert_eq!(send(&store, Method::Get, "/api/achievements/99", None).await.status, 404);
    assert_eq!(send(&store, Method::Post, "/api/achievements/1", None).await.status, 404);

    let response = send(&store, Method::Patch, "/api/news/99", Some(json!({ "title": "x" }))).await;
    assert_eq!(response.status, 404);
    assert_eq!(response.body["message"], "News post not found");
}

#[tokio::test]
async fn test_category_route() {
    let store = seeded().await;

    let response = send(&store, Method::Get, "/api/reviews/category/workshop", None).await;
    assert_eq!(response.status, 200);
    let reviews = response.body.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["category"], "workshop");

    let response = send(&store, Method::Get, "/api/reviews/category/none", None).await;
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_contact_create_is_validated() {
    let store = seeded().await;

    let response = send(&store, Method::Post, "/api/contact", Some(json!({ "name": "Mara" }))).await;
    assert_eq!(response.status, 400);
    assert_eq!(response.body["message"], "Validation error");
    let fields: Vec<&str> = response.body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|issue| issue["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "eventDate", "eventType", "performanceType"]);

    let response = send(
        &store,
        Method::Post,
        "/api/contact",
        Some(json!({
            "name": "Mara",
            "email": "mara@example.com",
            "eventDate": "2026-06-01",
            "eventType": "Hochzeit",
            "performanceType": "Feuershow",
            "message": null,
            "status": "archived"
        })),
    )
    .await;
    assert_eq!(response.status, 201);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["status"], "new");
    assert_eq!(response.body["message"], Value::Null);
}

#[tokio::test]
async fn test_validation_only_guards_selected_paths() {
    let store = seeded().await;

    // Achievement and feature updates are checked field by field
    let response = send(&store, Method::Patch, "/api/achievements/1", Some(json!({ "title": 5 }))).await;
    assert_eq!(response.status, 400);
    assert_eq!(response.body["errors"][0]["field"], "title");
    let response = send(&store, Method::Patch, "/api/features/1", Some(json!({ "sortOrder": "first" }))).await;
    assert_eq!(response.status, 400);

    // Creating them is not: an empty body yields a record full of defaults
    let response = send(&store, Method::Post, "/api/achievements", Some(json!({}))).await;
    assert_eq!(response.status, 201);
    assert_eq!(response.body["title"], "Neuer Erfolg");
    let response = send(&store, Method::Post, "/api/features", None).await;
    assert_eq!(response.status, 201);
    assert_eq!(response.body["title"], "Neues Feature");

    // Other kinds ignore fields they do not know
    let response = send(
        &store,
        Method::Patch,
        "/api/services/1",
        Some(json!({ "title": "Feuershow XL", "unknownField": true })),
    )
    .await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["title"], "Feuershow XL");
}

#[tokio::test]
async fn test_move_and_toggle_routes() {
    let store = seeded().await;

    let response = send(&store, Method::Patch, "/api/features/3/move-up", None).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["sortOrder"], 2);

    let response = send(&store, Method::Patch, "/api/features/3/move-down", None).await;
    assert_eq!(response.body["sortOrder"], 3);

    let response = send(&store, Method::Patch, "/api/gallery/1/move-up", None).await;
    assert_eq!(response.status, 400);

    let response = send(&store, Method::Patch, "/api/features/3/toggle", Some(json!({}))).await;
    assert_eq!(response.status, 400);
    assert_eq!(response.body["errors"][0]["field"], "active");

    let response = send(&store, Method::Patch, "/api/features/3/toggle", Some(json!({ "active": false }))).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["isActive"], false);
}

#[tokio::test]
async fn test_delete_route() {
    let store = seeded().await;

    let response = send(&store, Method::Delete, "/api/news/1", None).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["message"], "News post deleted successfully");

    assert_eq!(send(&store, Method::Delete, "/api/news/1", None).await.status, 404);
    assert_eq!(send(&store, Method::Get, "/api/news/1", None).await.status, 404);

    let response = send(&store, Method::Post, "/api/news", Some(json!({ "title": "Neu" }))).await;
    assert_eq!(response.body["id"], 7);
}

#[tokio::test]
async fn test_act_titled_like_a_route_stays_reachable() {
    let store = seeded().await;

    let response = send(&store, Method::Post, "/api/acts", Some(json!({ "title": "Manage" }))).await;
    assert_eq!(response.status, 201);
    assert_eq!(response.body["id"], "manage-2");

    let single = send(&store, Method::Get, "/api/acts/manage-2", None).await;
    assert_eq!(single.status, 200);
    assert_eq!(single.body["title"], "Manage");

    let manage = send(&store, Method::Get, "/api/acts/manage", None).await;
    assert_eq!(manage.body.as_array().map(Vec::len), Some(9));
}

#[tokio::test]
async fn test_move_at_sort_order_limit_is_not_an_error() {
    let store = seeded().await;

    let response = send(&store, Method::Patch, "/api/features/1", Some(json!({ "sortOrder": i32::MAX }))).await;
    assert_eq!(response.status, 200);

    let response = send(&store, Method::Patch, "/api/features/1/move-down", None).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["sortOrder"], i32::MAX);
}

#[test]
fn test_method_parsing() {
    assert_eq!("get".parse::<Method>(), Ok(Method::Get));
    assert_eq!("PATCH".parse::<Method>(), Ok(Method::Patch));
    assert!("PUT".parse::<Method>().is_err());
}
