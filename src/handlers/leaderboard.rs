use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};

use crate::{
  entity::leaderboard, prelude::*, state::AppState,
  sv::leaderboard::EntryData,
};

/// Stored entries, best rank first.
pub async fn list(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<leaderboard::Model>>> {
  Ok(Json(app.sv().leaderboard.all().await?))
}

/// Runs the batch aggregation pass and returns the fresh board.
pub async fn recompute(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<leaderboard::Model>>> {
  Ok(Json(app.sv().leaderboard.rebuild().await?))
}

pub async fn create(
  State(app): State<Arc<AppState>>,
  Json(data): Json<EntryData>,
) -> Result<(StatusCode, Json<leaderboard::Model>)> {
  let entry = app.sv().leaderboard.create(data).await?;
  Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn retrieve(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
) -> Result<Json<leaderboard::Model>> {
  Ok(Json(app.sv().leaderboard.by_id(id).await?))
}

pub async fn update(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
  Json(data): Json<EntryData>,
) -> Result<Json<leaderboard::Model>> {
  Ok(Json(app.sv().leaderboard.update(id, data).await?))
}

pub async fn delete(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
) -> Result<StatusCode> {
  app.sv().leaderboard.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
