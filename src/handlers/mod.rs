pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::State,
  routing::{get, post},
};

use crate::state::AppState;

/// API root listing every available endpoint.
pub async fn api_root(State(app): State<Arc<AppState>>) -> Json<json::Value> {
  let base = &app.config.base_url;
  Json(json::json!({
    "users": format!("{base}/api/users"),
    "teams": format!("{base}/api/teams"),
    "activities": format!("{base}/api/activities"),
    "leaderboard": format!("{base}/api/leaderboard"),
    "workouts": format!("{base}/api/workouts"),
  }))
}

pub async fn health() -> &'static str {
  "OK"
}

/// The full REST surface, without middleware.
pub fn router(app: Arc<AppState>) -> Router {
  Router::new()
    .route("/", get(api_root))
    .route("/health", get(health))
    .route("/api/users", get(user::list).post(user::create))
    .route(
      "/api/users/{id}",
      get(user::retrieve).put(user::update).delete(user::delete),
    )
    .route("/api/teams", get(team::list).post(team::create))
    .route(
      "/api/teams/{id}",
      get(team::retrieve).put(team::update).delete(team::delete),
    )
    .route("/api/activities", get(activity::list).post(activity::create))
    .route(
      "/api/activities/{id}",
      get(activity::retrieve).put(activity::update).delete(activity::delete),
    )
    .route(
      "/api/leaderboard",
      get(leaderboard::list).post(leaderboard::create),
    )
    .route("/api/leaderboard/recompute", post(leaderboard::recompute))
    .route(
      "/api/leaderboard/{id}",
      get(leaderboard::retrieve)
        .put(leaderboard::update)
        .delete(leaderboard::delete),
    )
    .route("/api/workouts", get(workout::list).post(workout::create))
    .route(
      "/api/workouts/{id}",
      get(workout::retrieve).put(workout::update).delete(workout::delete),
    )
    .with_state(app)
}

#[cfg(test)]
mod tests {
  use axum::body::Body;
  use axum::http::{Request, StatusCode, header};
  use sea_orm::{ConnectionTrait, Database, DbBackend, Schema};
  use tower::util::ServiceExt;

  use super::*;
  use crate::entity::{activity, leaderboard, team, user, workout};
  use crate::state::Config;

  async fn test_router() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let schema = Schema::new(DbBackend::Sqlite);

    let stmt = schema.create_table_from_entity(team::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();
    let stmt = schema.create_table_from_entity(user::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();
    let stmt = schema.create_table_from_entity(activity::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();
    let stmt = schema.create_table_from_entity(leaderboard::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();
    let stmt = schema.create_table_from_entity(workout::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    router(Arc::new(AppState { db, config: Config::default() }))
  }

  fn post_json(uri: &str, body: json::Value) -> Request<Body> {
    Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
  }

  fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
  }

  async fn body_json(response: axum::response::Response) -> json::Value {
    let bytes =
      axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    json::from_slice(&bytes).unwrap()
  }

  #[tokio::test]
  async fn test_health() {
    let app = test_router().await;

    let response = app.oneshot(get_req("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn test_api_root_lists_endpoints() {
    let app = test_router().await;

    let response = app.oneshot(get_req("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["users"], "http://localhost:3000/api/users");
    assert_eq!(body["leaderboard"], "http://localhost:3000/api/leaderboard");
  }

  #[tokio::test]
  async fn test_user_crud_roundtrip() {
    let app = test_router().await;

    let response = app
      .clone()
      .oneshot(post_json(
        "/api/users",
        json::json!({
          "name": "API Hero",
          "email": "api@hero.com",
          "password": "testpass123"
        }),
      ))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response =
      app.clone().oneshot(get_req("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = app
      .clone()
      .oneshot(get_req(&format!("/api/users/{id}")))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
      .clone()
      .oneshot(
        Request::builder()
          .method("DELETE")
          .uri(format!("/api/users/{id}"))
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response =
      app.oneshot(get_req(&format!("/api/users/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn test_duplicate_email_conflicts() {
    let app = test_router().await;

    let payload = json::json!({
      "name": "API Hero",
      "email": "api@hero.com",
      "password": "testpass123"
    });

    let response =
      app.clone().oneshot(post_json("/api/users", payload.clone())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response =
      app.oneshot(post_json("/api/users", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
  }

  #[tokio::test]
  async fn test_user_with_unknown_team_unprocessable() {
    let app = test_router().await;

    let response = app
      .oneshot(post_json(
        "/api/users",
        json::json!({
          "name": "API Hero",
          "email": "api@hero.com",
          "password": "testpass123",
          "team_id": 404
        }),
      ))
      .await
      .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[tokio::test]
  async fn test_recompute_returns_ranked_board() {
    let app = test_router().await;

    let response = app
      .clone()
      .oneshot(post_json(
        "/api/users",
        json::json!({
          "name": "X",
          "email": "x@test.com",
          "password": "testpass123"
        }),
      ))
      .await
      .unwrap();
    let user = body_json(response).await;
    let user_id = user["id"].as_i64().unwrap();

    let response = app
      .clone()
      .oneshot(post_json(
        "/api/activities",
        json::json!({
          "user_id": user_id,
          "activity_type": "Running",
          "duration": 30,
          "distance": 5.0,
          "calories": 300,
          "date": "2026-08-01T10:00:00"
        }),
      ))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
      .clone()
      .oneshot(post_json("/api/leaderboard/recompute", json::json!({})))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let board = body_json(response).await;
    let entries = board.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["total_calories"], 300);
    assert_eq!(entries[0]["rank"], 1);
  }
}
