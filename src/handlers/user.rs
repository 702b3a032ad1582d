use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};

use crate::{entity::user, prelude::*, state::AppState, sv::user::UserData};

pub async fn list(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<user::Model>>> {
  Ok(Json(app.sv().user.all().await?))
}

pub async fn create(
  State(app): State<Arc<AppState>>,
  Json(data): Json<UserData>,
) -> Result<(StatusCode, Json<user::Model>)> {
  let user = app.sv().user.create(data).await?;
  Ok((StatusCode::CREATED, Json(user)))
}

pub async fn retrieve(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
) -> Result<Json<user::Model>> {
  Ok(Json(app.sv().user.by_id(id).await?))
}

pub async fn update(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
  Json(data): Json<UserData>,
) -> Result<Json<user::Model>> {
  Ok(Json(app.sv().user.update(id, data).await?))
}

pub async fn delete(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
) -> Result<StatusCode> {
  app.sv().user.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
