//! End-to-end tests through the HTTP router against a disposable Postgres
//! container: enroll, vote, re-vote, read standings.

mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

use concursos_backend::{
    config::{Config, DatabaseConfig, ServerConfig},
    constants::API_BASE_PATH,
    handlers,
    state::AppState,
};

use common::{create_contest, setup};

fn app(pool: PgPool) -> Router {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
            rust_log: "info".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://test".to_string(),
            max_connections: 5,
        },
    };
    Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .with_state(AppState::new(pool, config))
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn end_to_end_vote_flow() {
    let Some((_container, pool)) = setup().await else {
        return;
    };
    let concurso = create_contest(&pool).await;
    let app = app(pool);

    // Enroll a new contestant
    let (status, body) = post_json(
        &app,
        "/api/concursantes",
        json!({"nombre": "Ana", "concurso_id": concurso}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let ana = body["concursante_id"].as_i64().unwrap();

    // First vote registers a rating
    let (status, body) = post_json(
        &app,
        "/api/votar",
        json!({"calificacion": 8, "concursante_id": ana, "concurso_id": concurso}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("registrada"));

    let uri = format!("/api/concursantes/concurso/{concurso}");
    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["concursante_id"].as_i64().unwrap(), ana);
    assert_eq!(rows[0]["nombre"], "Ana");
    assert_eq!(rows[0]["calificacion"].as_f64().unwrap(), 8.0);

    // A second vote overwrites, leaving one row
    let (status, body) = post_json(
        &app,
        "/api/votar",
        json!({"calificacion": 5, "concursante_id": ana, "concurso_id": concurso}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("actualizada"));

    let (_, body) = get_json(&app, &uri).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["calificacion"].as_f64().unwrap(), 5.0);

    // Re-enrolling the same name reuses the contestant
    let (status, body) = post_json(
        &app,
        "/api/concursantes",
        json!({"nombre": "Ana", "concurso_id": concurso}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["concursante_id"].as_i64().unwrap(), ana);

    // The contest shows up in the listing
    let (status, body) = get_json(&app, "/api/concursos").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body.as_array()
            .unwrap()
            .iter()
            .any(|c| c["concurso_id"].as_i64() == Some(concurso))
    );
}

#[tokio::test]
async fn missing_vote_field_is_rejected_without_write() {
    let Some((_container, pool)) = setup().await else {
        return;
    };
    let concurso = create_contest(&pool).await;
    let app_router = app(pool.clone());

    let (status, body) = post_json(
        &app_router,
        "/api/votar",
        json!({"calificacion": 8, "concurso_id": concurso}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let ratings: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM calificaciones"#)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(ratings, 0);
}

#[tokio::test]
async fn unknown_contest_standings_are_not_found() {
    let Some((_container, pool)) = setup().await else {
        return;
    };
    let app = app(pool);

    let (status, body) = get_json(&app, "/api/concursantes/concurso/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
