//! Blog listing and editor against a mock backend

use blog_api::ApiClient;
use blog_core::BlogPost;
use blog_session::{MemoryStore, Session, StoredKeys};
use blog_views::{BlogListView, FixedAnswer};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn signed_in_view(server: &MockServer) -> BlogListView {
    let mut keys = StoredKeys::new();
    keys.insert("token", "abc");
    let session = Session::new(MemoryStore::with_keys(keys));
    BlogListView::new(ApiClient::new(&server.uri(), session))
}

fn post(id: i64, title: &str) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        content: format!("{title} body"),
        owner_id: 1,
    }
}

async fn mount_listing(server: &MockServer, posts: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(posts))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_all_loads_listing_with_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blogs"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 42, "title": "First", "content": "hello", "owner_id": 1},
            {"id": 7, "title": "x42", "content": "world", "owner_id": 2}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut view = signed_in_view(&mock_server);

    assert!(view.fetch_all().await);

    assert_eq!(view.blogs.len(), 2);
    assert_eq!(view.error, None);
    assert!(!view.loading);

    view.search = "42".to_string();
    let ids: Vec<i64> = view.filtered().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![42, 7]);
}

#[tokio::test]
async fn test_fetch_all_unauthorized_keeps_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blogs"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})))
        .mount(&mock_server)
        .await;

    let mut view = signed_in_view(&mock_server);
    view.blogs = vec![post(1, "Cached")];

    assert!(!view.fetch_all().await);

    assert_eq!(
        view.error.as_deref(),
        Some("Authentication required. Please login.")
    );
    assert_eq!(view.blogs, vec![post(1, "Cached")]);
    assert!(!view.loading);
}

#[tokio::test]
async fn test_fetch_all_other_failure_uses_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blogs"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&mock_server)
        .await;

    let mut view = signed_in_view(&mock_server);
    view.blogs = vec![post(1, "Cached")];

    assert!(!view.fetch_all().await);

    assert_eq!(view.error.as_deref(), Some("Failed to load blogs"));
    assert_eq!(view.blogs.len(), 1);
}

#[tokio::test]
async fn test_view_selects_post() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blogs/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42, "title": "First", "content": "hello", "owner_id": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut view = signed_in_view(&mock_server);

    assert!(view.view(42).await);
    assert_eq!(view.selected.as_ref().map(|p| p.title.as_str()), Some("First"));

    view.close_selected();
    assert_eq!(view.selected, None);
}

#[tokio::test]
async fn test_view_missing_post_surfaces_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blogs/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Blog not found"})))
        .mount(&mock_server)
        .await;

    let mut view = signed_in_view(&mock_server);

    assert!(!view.view(99).await);
    assert_eq!(view.error.as_deref(), Some("Blog not found"));
    assert_eq!(view.selected, None);
}

#[tokio::test]
async fn test_submit_form_creates_then_refreshes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blogs"))
        .and(body_json(json!({"title": "New", "content": "text"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "title": "New", "content": "text", "owner_id": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_listing(
        &mock_server,
        json!([{"id": 3, "title": "New", "content": "text", "owner_id": 1}]),
    )
    .await;

    let mut view = signed_in_view(&mock_server);
    view.form.title = "New".to_string();
    view.form.content = "text".to_string();

    assert!(view.submit_form().await);

    assert_eq!(view.blogs.len(), 1);
    assert!(view.form.title.is_empty());
    assert_eq!(view.editing_id, None);
}

#[tokio::test]
async fn test_submit_form_updates_post_being_edited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/blogs/5"))
        .and(body_json(json!({"title": "Renamed", "content": "Old body"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5, "title": "Renamed", "content": "Old body", "owner_id": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_listing(
        &mock_server,
        json!([{"id": 5, "title": "Renamed", "content": "Old body", "owner_id": 1}]),
    )
    .await;

    let mut view = signed_in_view(&mock_server);
    view.start_edit(&post(5, "Old"));
    view.form.title = "Renamed".to_string();

    assert!(view.submit_form().await);

    assert_eq!(view.editing_id, None);
    assert_eq!(view.blogs[0].title, "Renamed");
}

#[tokio::test]
async fn test_submit_form_forbidden_surfaces_detail_and_keeps_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/blogs/5"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "Not allowed"})))
        .mount(&mock_server)
        .await;

    let mut view = signed_in_view(&mock_server);
    view.start_edit(&post(5, "Old"));

    assert!(!view.submit_form().await);

    assert_eq!(view.error.as_deref(), Some("Not allowed"));
    assert_eq!(view.editing_id, Some(5));
    assert_eq!(view.form.title, "Old");
}

#[tokio::test]
async fn test_submit_form_failure_without_detail_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blogs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut view = signed_in_view(&mock_server);

    assert!(!view.submit_form().await);
    assert_eq!(view.error.as_deref(), Some("Failed to save blog"));
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/blogs/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut view = signed_in_view(&mock_server);
    view.blogs = vec![post(42, "Keep me")];

    assert!(!view.delete_record(42, &FixedAnswer(false)).await);

    assert_eq!(view.blogs, vec![post(42, "Keep me")]);
}

#[tokio::test]
async fn test_confirmed_delete_refreshes_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/blogs/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_listing(&mock_server, json!([])).await;

    let mut view = signed_in_view(&mock_server);
    view.blogs = vec![post(42, "Gone soon")];

    assert!(view.delete_record(42, &FixedAnswer(true)).await);

    assert!(view.blogs.is_empty());
    assert_eq!(view.error, None);
}

#[tokio::test]
async fn test_failed_delete_surfaces_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/blogs/42"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "Not allowed"})))
        .mount(&mock_server)
        .await;

    let mut view = signed_in_view(&mock_server);
    view.blogs = vec![post(42, "Not mine")];

    assert!(!view.delete_record(42, &FixedAnswer(true)).await);

    assert_eq!(view.error.as_deref(), Some("Not allowed"));
    assert_eq!(view.blogs.len(), 1);
}

#[tokio::test]
async fn test_saved_post_with_failed_refresh_reports_load_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "title": "New", "content": "text", "owner_id": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blogs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut view = signed_in_view(&mock_server);
    view.form.title = "New".to_string();
    view.form.content = "text".to_string();

    assert!(view.submit_form().await);

    assert_eq!(view.error.as_deref(), Some("Failed to load blogs"));
    assert_eq!(view.editing_id, None);
}
