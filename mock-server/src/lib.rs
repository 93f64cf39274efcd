use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub name: String,
}

/// Error payload returned with 4xx responses.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiMessage {
    pub msg: String,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    users: HashMap<u64, User>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<ApiMessage>)>;

fn api_error(status: StatusCode, msg: &str) -> (StatusCode, Json<ApiMessage>) {
    (status, Json(ApiMessage { msg: msg.to_string() }))
}

/// Router with one user (`id = 1`, "Ada") preloaded.
pub fn app() -> Router {
    let mut store = Store::default();
    store.next_id = 2;
    store.users.insert(
        1,
        User {
            id: 1,
            name: "Ada".to_string(),
        },
    );
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/empty", get(empty))
        .route("/crash", get(crash))
        .route("/garbage", get(garbage))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    let mut users: Vec<User> = store.users.values().cloned().collect();
    users.sort_by_key(|u| u.id);
    Json(users)
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<User>> {
    let store = db.read().await;
    store
        .users
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "not found"))
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<CreateUser>,
) -> ApiResult<(StatusCode, Json<User>)> {
    if input.name.trim().is_empty() {
        return Err(api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "name must not be empty",
        ));
    }
    let mut store = db.write().await;
    let user = User {
        id: store.next_id,
        name: input.name,
    };
    store.next_id += 1;
    store.users.insert(user.id, user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

/// Success status with no content.
async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Failure status with an empty body.
async fn crash() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Failure status with a body no JSON decoder will accept.
async fn garbage() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "<html><body>oops</body></html>")
}
