//! Post API integration tests
//!
//! The post CRUD contract: id shape before store access, owner-only
//! update/delete, author expansion, and newest-first feed ordering.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{bearer, create_post, register_user, spawn_app};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn create_post_requires_auth() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/posts")
        .json(&serde_json::json!({ "content": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_post_requires_content() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "alice", "alice@example.com", "secret123").await;

    let response = app
        .server
        .post("/api/posts")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({ "image": "https://example.com/pic.png" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Post content is required");
}

#[tokio::test]
async fn create_post_rejects_overlong_content() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "alice", "alice@example.com", "secret123").await;

    let response = app
        .server
        .post("/api/posts")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({ "content": "x".repeat(501) }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Post content must be at most 500 characters");
}

#[tokio::test]
async fn create_post_expands_author() {
    let app = spawn_app().await;
    let (token, user) = register_user(&app, "alice", "alice@example.com", "secret123").await;

    let response = app
        .server
        .post("/api/posts")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({ "content": "my first ripple" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Post created successfully");

    let post = &body["post"];
    assert_eq!(post["content"], "my first ripple");
    assert_eq!(post["image"], "");
    assert_eq!(post["likes"], serde_json::json!([]));
    assert_eq!(post["commentsCount"], 0);

    let author = &post["author"];
    assert_eq!(author["id"], user["id"]);
    assert_eq!(author["username"], "alice");
    assert!(author["profilePicture"].as_str().is_some());
    // Author expansion is the public summary only.
    assert!(author.get("email").is_none());
}

#[tokio::test]
async fn list_posts_is_public_and_newest_first() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "alice", "alice@example.com", "secret123").await;

    for content in ["first", "second", "third"] {
        create_post(&app, &token, content).await;
        // Distinct creation timestamps keep the expected order strict.
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    // No Authorization header: the feed is public.
    let response = app.server.get("/api/posts").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Posts fetched successfully");

    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["content"], "third");
    assert_eq!(posts[1]["content"], "second");
    assert_eq!(posts[2]["content"], "first");

    let timestamps: Vec<DateTime<Utc>> = posts
        .iter()
        .map(|p| p["createdAt"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn get_post_rejects_malformed_id() {
    let app = spawn_app().await;

    let response = app.server.get("/api/posts/abc").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Invalid post ID format");
}

#[tokio::test]
async fn get_post_unknown_id_is_not_found() {
    let app = spawn_app().await;

    let response = app
        .server
        .get(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Post not found");
}

#[tokio::test]
async fn get_post_by_id_returns_expanded_post() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "alice", "alice@example.com", "secret123").await;
    let post = create_post(&app, &token, "findable").await;

    let response = app
        .server
        .get(&format!("/api/posts/{}", post["id"].as_str().unwrap()))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Post fetched successfully");
    assert_eq!(body["post"]["content"], "findable");
    assert_eq!(body["post"]["author"]["username"], "alice");
}

#[tokio::test]
async fn update_post_is_owner_only() {
    let app = spawn_app().await;
    let (alice_token, _) = register_user(&app, "alice", "alice@example.com", "secret123").await;
    let (bob_token, _) = register_user(&app, "bob", "bob@example.com", "secret123").await;
    let post = create_post(&app, &alice_token, "alice's post").await;
    let post_id = post["id"].as_str().unwrap();

    let forbidden = app
        .server
        .put(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, bearer(&bob_token))
        .json(&serde_json::json!({ "content": "bob was here" }))
        .await;

    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = forbidden.json();
    assert_eq!(body["message"], "Not authorized to update this post");

    // The content is untouched, and the owner can still edit it.
    let fetched: serde_json::Value = app
        .server
        .get(&format!("/api/posts/{post_id}"))
        .await
        .json();
    assert_eq!(fetched["post"]["content"], "alice's post");

    let allowed = app
        .server
        .put(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, bearer(&alice_token))
        .json(&serde_json::json!({ "content": "edited by alice" }))
        .await;

    assert_eq!(allowed.status_code(), StatusCode::OK);
    let body: serde_json::Value = allowed.json();
    assert_eq!(body["message"], "Post updated successfully");
    assert_eq!(body["post"]["content"], "edited by alice");
}

#[tokio::test]
async fn update_post_image_semantics() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "alice", "alice@example.com", "secret123").await;

    let created = app
        .server
        .post("/api/posts")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({
            "content": "with image",
            "image": "https://example.com/pic.png",
        }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let created_body: serde_json::Value = created.json();
    let post_id = created_body["post"]["id"].as_str().unwrap().to_string();

    // Absent image field: the reference is kept.
    let kept: serde_json::Value = app
        .server
        .put(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({ "content": "new words" }))
        .await
        .json();
    assert_eq!(kept["post"]["image"], "https://example.com/pic.png");
    assert_eq!(kept["post"]["content"], "new words");

    // Explicit empty string: the reference is cleared.
    let cleared: serde_json::Value = app
        .server
        .put(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({ "image": "" }))
        .await
        .json();
    assert_eq!(cleared["post"]["image"], "");
    assert_eq!(cleared["post"]["content"], "new words");
}

#[tokio::test]
async fn update_post_unknown_id_is_not_found() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "alice", "alice@example.com", "secret123").await;

    let response = app
        .server
        .put(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({ "content": "anything" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_post_is_owner_only() {
    let app = spawn_app().await;
    let (alice_token, _) = register_user(&app, "alice", "alice@example.com", "secret123").await;
    let (bob_token, _) = register_user(&app, "bob", "bob@example.com", "secret123").await;
    let post = create_post(&app, &alice_token, "to be deleted").await;
    let post_id = post["id"].as_str().unwrap();

    let forbidden = app
        .server
        .delete(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, bearer(&bob_token))
        .await;

    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = forbidden.json();
    assert_eq!(body["message"], "Not authorized to delete this post");

    let still_there = app.server.get(&format!("/api/posts/{post_id}")).await;
    assert_eq!(still_there.status_code(), StatusCode::OK);

    let allowed = app
        .server
        .delete(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, bearer(&alice_token))
        .await;

    assert_eq!(allowed.status_code(), StatusCode::OK);
    let body: serde_json::Value = allowed.json();
    assert_eq!(body["message"], "Post deleted successfully");

    let gone = app.server.get(&format!("/api/posts/{post_id}")).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_post_requires_auth() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "alice", "alice@example.com", "secret123").await;
    let post = create_post(&app, &token, "protected").await;

    let response = app
        .server
        .delete(&format!("/api/posts/{}", post["id"].as_str().unwrap()))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
