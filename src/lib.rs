//! Fitness tracking REST backend
//!
//! Five resources (users, teams, activities, leaderboard, workouts)
//! exposed over CRUD endpoints, backed by SeaORM on SQLite. The one
//! derived resource is the leaderboard: a per-user snapshot of activity
//! totals with a dense rank, recomputed by an explicit batch pass.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod prelude;
pub mod seed;
pub mod state;
pub mod sv;
