//! Error types for the fitness tracker API

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("Database error: {0}")]
  Database(#[from] sea_orm::DbErr),

  #[error("User not found")]
  UserNotFound,

  #[error("Team not found")]
  TeamNotFound,

  #[error("Activity not found")]
  ActivityNotFound,

  #[error("Leaderboard entry not found")]
  EntryNotFound,

  #[error("Workout not found")]
  WorkoutNotFound,

  #[error("Email already registered")]
  EmailTaken,

  #[error("Team name already taken")]
  TeamNameTaken,

  #[error("Reference to unknown team {team_id}")]
  UnknownTeam { team_id: i32 },

  #[error("Reference to unknown user {user_id}")]
  UnknownUser { user_id: i32 },
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
      Error::UserNotFound
      | Error::TeamNotFound
      | Error::ActivityNotFound
      | Error::EntryNotFound
      | Error::WorkoutNotFound => StatusCode::NOT_FOUND,
      Error::EmailTaken | Error::TeamNameTaken => StatusCode::CONFLICT,
      Error::UnknownTeam { .. } | Error::UnknownUser { .. } => {
        StatusCode::UNPROCESSABLE_ENTITY
      }
    };

    // Do not leak database internals to clients
    let message = match &self {
      Error::Database(_) => "Database error".to_string(),
      other => other.to_string(),
    };

    let body = json::json!({
      "success": false,
      "error": message
    });

    (status, Json(body)).into_response()
  }
}

pub type Result<T> = std::result::Result<T, Error>;
