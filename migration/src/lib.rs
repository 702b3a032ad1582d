//! Database migrations using SeaORM

pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_teams;
mod m20260801_000002_create_users;
mod m20260801_000003_create_activities;
mod m20260801_000004_create_leaderboard;
mod m20260801_000005_create_workouts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20260801_000001_create_teams::Migration),
      Box::new(m20260801_000002_create_users::Migration),
      Box::new(m20260801_000003_create_activities::Migration),
      Box::new(m20260801_000004_create_leaderboard::Migration),
      Box::new(m20260801_000005_create_workouts::Migration),
    ]
  }
}
