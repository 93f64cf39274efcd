use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, ApiMessage, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- users ---

#[tokio::test]
async fn list_users_contains_seed_user() {
    let resp = app().oneshot(get("/users")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ada");
}

#[tokio::test]
async fn get_user_returns_200() {
    let resp = app().oneshot(get("/users/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = body_json(resp).await;
    assert_eq!(user.id, 1);
}

#[tokio::test]
async fn get_user_not_found_has_error_body() {
    let resp = app().oneshot(get("/users/404")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let msg: ApiMessage = body_json(resp).await;
    assert_eq!(msg.msg, "not found");
}

#[tokio::test]
async fn get_user_bad_id_returns_400() {
    let resp = app().oneshot(get("/users/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_user_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/users", r#"{"name":"Grace"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: User = body_json(resp).await;
    assert_eq!(user.id, 2);
    assert_eq!(user.name, "Grace");
}

#[tokio::test]
async fn create_user_blank_name_returns_422_with_message() {
    let resp = app()
        .oneshot(json_request("POST", "/users", r#"{"name":"  "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let msg: ApiMessage = body_json(resp).await;
    assert_eq!(msg.msg, "name must not be empty");
}

// --- classification fixtures ---

#[tokio::test]
async fn empty_returns_204_without_body() {
    let resp = app().oneshot(get("/empty")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn crash_returns_500_without_body() {
    let resp = app().oneshot(get("/crash")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn garbage_returns_400_with_html() {
    let resp = app().oneshot(get("/garbage")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_bytes(resp).await;
    assert!(serde_json::from_slice::<serde_json::Value>(&body).is_err());
}

// --- create then fetch ---

#[tokio::test]
async fn created_user_can_be_fetched() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/users", r#"{"name":"Linus"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: User = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get(&format!("/users/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: User = body_json(resp).await;
    assert_eq!(fetched, created);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/users"))
        .await
        .unwrap();
    let users: Vec<User> = body_json(resp).await;
    assert_eq!(users.len(), 2);
}
