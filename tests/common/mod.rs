#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use sara_backend::{config::Config, routes, AppState, SessionStore};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        assets_dir: "assets".into(),
    }
}

pub async fn migrated_db() -> DatabaseConnection {
    let db = sara_backend::db::connect_url("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    db
}

pub fn app_with(db: DatabaseConnection) -> Router {
    routes::create_router(AppState {
        db,
        config: test_config(),
        sessions: SessionStore::new(),
    })
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, cookie: Option<&str>, body: &Value) -> Request<Body> {
    post_raw(uri, cookie, body.to_string())
}

pub fn post_raw(uri: &str, cookie: Option<&str>, body: String) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

/// `name=value` part of the session cookie set by a response.
pub fn session_cookie(response: &Response<Body>) -> String {
    let raw = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response sets a session cookie")
        .to_str()
        .unwrap();
    raw.split(';').next().unwrap().to_string()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn text_body(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
