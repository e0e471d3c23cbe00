use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use gatekeeper::router::init_router;
use gatekeeper::state::AppState;
use gatekeeper_auth::{Principal, create_access_token};
use gatekeeper_config::{CorsConfig, JwtConfig};
use gatekeeper_core::hash_password;
use gatekeeper_models::UserRole;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[allow(dead_code)]
pub fn test_state(pool: PgPool) -> AppState {
    AppState::new(pool, test_jwt_config(), CorsConfig::from_list("http://localhost:3000"))
}

#[allow(dead_code)]
pub fn setup_test_app(pool: PgPool) -> Router {
    init_router(test_state(pool))
}

/// Inserts a user directly, bypassing registration.
#[allow(dead_code)]
pub async fn create_test_user(
    pool: &PgPool,
    name: &str,
    password: &str,
    role: UserRole,
) -> TestUser {
    let email = generate_unique_email();
    let hashed = hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (name, email, password_hash, role) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(&email)
    .bind(hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        name: name.to_string(),
        email,
        password: password.to_string(),
        role,
    }
}

#[allow(dead_code)]
pub async fn create_test_permission(pool: &PgPool, code: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO permission (code) VALUES ($1) RETURNING id")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn grant(pool: &PgPool, user_id: Uuid, permission_id: Uuid) {
    sqlx::query("INSERT INTO user_permissions (user_id, permission_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(permission_id)
        .execute(pool)
        .await
        .unwrap();
}

#[allow(dead_code)]
pub fn token_for(user: &TestUser) -> String {
    let principal = Principal::new(user.id, user.email.clone(), user.role);
    create_access_token(&principal, &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn read_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_name() -> String {
    format!("user-{}", Uuid::new_v4())
}
