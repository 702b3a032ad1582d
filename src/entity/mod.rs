//! SeaORM entity definitions for the fitness tracker tables.

pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;
