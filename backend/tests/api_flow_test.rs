//! End-to-end API flows through the full router

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn register_create_fetch_update_delete_logout() {
    let app = common::TestApp::new();

    // Register
    let (status, session) = app
        .post(
            "/users",
            None,
            json!({ "username": "alice123", "password": "password123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = session["token"].as_str().unwrap().to_string();
    let user_id = session["userId"].as_str().unwrap().to_string();

    // Create a post with the fresh token
    let (status, post) = app
        .post(
            "/posts",
            Some(&token),
            json!({ "title": "Test Post Title", "content": "This is a test post content." }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(post["title"], "Test Post Title");
    assert_eq!(post["authorId"], user_id);
    let post_id = post["id"].as_str().unwrap().to_string();

    // The created post is fetchable, identically
    let (status, fetched) = app.get(&format!("/posts/{post_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, post);

    // And appears in the listing
    let (status, listing) = app.get("/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing.as_array().unwrap().len(), 1);

    // Update it
    let (status, updated) = app
        .put(
            &format!("/posts/{post_id}"),
            None,
            json!({ "title": "Renamed" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Renamed");
    assert_eq!(updated["content"], "This is a test post content.");

    // Delete it
    let (status, body) = app.delete(&format!("/posts/{post_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Post deleted");

    let (status, _) = app.get(&format!("/posts/{post_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Logout, after which the token is dead
    let (status, body) = app.post_empty("/auth/logout", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out");

    let (status, _) = app
        .post(
            "/posts",
            Some(&token),
            json!({ "title": "After logout", "content": "" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_favorite_book_flow() {
    let app = common::TestApp::new();

    let (_, session) = app
        .post(
            "/users",
            None,
            json!({ "username": "bookworm1", "password": "password123" }),
        )
        .await;
    let user_id = session["userId"].as_str().unwrap().to_string();

    // Fresh profile has no favorite book
    let (status, profile) = app.get(&format!("/users/{user_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(profile.get("favoriteBook").is_none());

    // Set one, change it, and read it back each time
    let first = json!({ "title": "1984", "author_name": ["George Orwell"] });
    let (status, updated) = app
        .put(
            &format!("/users/{user_id}"),
            None,
            json!({ "favoriteBook": first }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["favoriteBook"], first);

    let second = json!({ "title": "Brave New World", "author_name": ["Aldous Huxley"] });
    let (status, updated) = app
        .put(
            &format!("/users/{user_id}"),
            None,
            json!({ "favoriteBook": second }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["favoriteBook"], second);

    let (_, profile) = app.get(&format!("/users/{user_id}")).await;
    assert_eq!(profile["favoriteBook"], second);
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn two_logins_create_independent_sessions() {
    let app = common::TestApp::new();

    app.post(
        "/users",
        None,
        json!({ "username": "twice", "password": "password123" }),
    )
    .await;

    let credentials = json!({ "username": "twice", "password": "password123" });
    let (_, first) = app.post("/auth/login", None, credentials.clone()).await;
    let (_, second) = app.post("/auth/login", None, credentials).await;

    let first_token = first["token"].as_str().unwrap().to_string();
    let second_token = second["token"].as_str().unwrap().to_string();
    assert_ne!(first_token, second_token);

    // Revoking one leaves the other valid
    let (status, _) = app.post_empty("/auth/logout", Some(&first_token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post(
            "/posts",
            Some(&second_token),
            json!({ "title": "Still here", "content": "" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}
