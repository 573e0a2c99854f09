use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use quill_core::db::open_db_in_memory;
use quill_server::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_router() -> Router {
    let conn = open_db_in_memory().unwrap();
    build_router(Arc::new(AppState::new(conn)))
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let router = test_router();
    let (status, body) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn full_author_post_lifecycle() {
    let router = test_router();

    // Create author -> 201 with integer id.
    let (status, author) = send(
        &router,
        "POST",
        "/authors",
        Some(json!({"name": "A", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let author_id = author["id"].as_i64().unwrap();

    // Create post -> 201.
    let (status, post) = send(
        &router,
        "POST",
        "/posts",
        Some(json!({"title": "T", "content": "C", "author_id": author_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let post_id = post["id"].as_i64().unwrap();

    // Post detail carries the owner's name/email.
    let (status, detail) = send(&router, "GET", &format!("/posts/{post_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["author"]["name"], "A");
    assert_eq!(detail["author"]["email"], "a@x.com");

    // Delete the author -> 200 with confirmation message.
    let (status, body) = send(&router, "DELETE", &format!("/authors/{author_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Author and associated posts deleted");

    // The cascade removed the post.
    let (status, _) = send(&router, "GET", &format!("/posts/{post_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn author_validation_and_conflict_map_to_400() {
    let router = test_router();

    let (status, body) = send(
        &router,
        "POST",
        "/authors",
        Some(json!({"name": "A", "email": "not-an-email"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));

    // Missing fields behave like empty fields, not a decode failure.
    let (status, _) = send(&router, "POST", "/authors", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &router,
        "POST",
        "/authors",
        Some(json!({"name": "A", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &router,
        "POST",
        "/authors",
        Some(json!({"name": "B", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already in use"));
}

#[tokio::test]
async fn post_with_unknown_author_is_rejected_with_400() {
    let router = test_router();

    let (status, body) = send(
        &router,
        "POST",
        "/posts",
        Some(json!({"title": "T", "content": "C", "author_id": 12345})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("author_id"));
}

#[tokio::test]
async fn missing_resources_return_404() {
    let router = test_router();

    for uri in ["/authors/999", "/posts/999", "/authors/999/posts"] {
        let (status, body) = send(&router, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    let (status, _) = send(&router, "DELETE", "/posts/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &router,
        "PUT",
        "/authors/999",
        Some(json!({"name": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_list_supports_author_filter_and_eager_owner() {
    let router = test_router();

    let (_, ada) = send(
        &router,
        "POST",
        "/authors",
        Some(json!({"name": "Ada", "email": "ada@x.com"})),
    )
    .await;
    let (_, grace) = send(
        &router,
        "POST",
        "/authors",
        Some(json!({"name": "Grace", "email": "grace@x.com"})),
    )
    .await;
    let ada_id = ada["id"].as_i64().unwrap();
    let grace_id = grace["id"].as_i64().unwrap();

    for (title, id) in [("a1", ada_id), ("g1", grace_id), ("a2", ada_id)] {
        let (status, _) = send(
            &router,
            "POST",
            "/posts",
            Some(json!({"title": title, "content": "body", "author_id": id})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, list) = send(&router, "GET", &format!("/posts?author_id={ada_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item["author_id"].as_i64().unwrap(), ada_id);
        assert_eq!(item["author"]["name"], "Ada");
    }

    let (status, all) = send(&router, "GET", "/posts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    // Nested listing returns plain posts without the owner attachment.
    let (status, nested) = send(&router, "GET", &format!("/authors/{ada_id}/posts"), None).await;
    assert_eq!(status, StatusCode::OK);
    let nested = nested.as_array().unwrap();
    assert_eq!(nested.len(), 2);
    assert!(nested[0].get("author").is_none());
}

#[tokio::test]
async fn put_post_updates_fields_but_never_ownership() {
    let router = test_router();

    let (_, author) = send(
        &router,
        "POST",
        "/authors",
        Some(json!({"name": "Ada", "email": "ada@x.com"})),
    )
    .await;
    let author_id = author["id"].as_i64().unwrap();

    let (_, post) = send(
        &router,
        "POST",
        "/posts",
        Some(json!({"title": "Draft", "content": "v1", "author_id": author_id})),
    )
    .await;
    let post_id = post["id"].as_i64().unwrap();

    // author_id in the payload is ignored by the transport contract.
    let (status, updated) = send(
        &router,
        "PUT",
        &format!("/posts/{post_id}"),
        Some(json!({"title": "Final", "author_id": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Final");
    assert_eq!(updated["content"], "v1");
    assert_eq!(updated["author_id"].as_i64().unwrap(), author_id);
}

#[tokio::test]
async fn delete_post_returns_confirmation_message() {
    let router = test_router();

    let (_, author) = send(
        &router,
        "POST",
        "/authors",
        Some(json!({"name": "Ada", "email": "ada@x.com"})),
    )
    .await;
    let (_, post) = send(
        &router,
        "POST",
        "/posts",
        Some(json!({
            "title": "T",
            "content": "C",
            "author_id": author["id"].as_i64().unwrap()
        })),
    )
    .await;

    let post_id = post["id"].as_i64().unwrap();
    let (status, body) = send(&router, "DELETE", &format!("/posts/{post_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Post deleted");
}
