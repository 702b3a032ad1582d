use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};

use crate::{
  entity::workout, prelude::*, state::AppState, sv::workout::WorkoutData,
};

pub async fn list(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<workout::Model>>> {
  Ok(Json(app.sv().workout.all().await?))
}

pub async fn create(
  State(app): State<Arc<AppState>>,
  Json(data): Json<WorkoutData>,
) -> Result<(StatusCode, Json<workout::Model>)> {
  let workout = app.sv().workout.create(data).await?;
  Ok((StatusCode::CREATED, Json(workout)))
}

pub async fn retrieve(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
) -> Result<Json<workout::Model>> {
  Ok(Json(app.sv().workout.by_id(id).await?))
}

pub async fn update(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
  Json(data): Json<WorkoutData>,
) -> Result<Json<workout::Model>> {
  Ok(Json(app.sv().workout.update(id, data).await?))
}

pub async fn delete(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
) -> Result<StatusCode> {
  app.sv().workout.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
