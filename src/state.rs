use migration::Migrator;

use crate::{prelude::*, sv};

#[derive(Debug, Clone)]
pub struct Config {
  /// Base URL the api root advertises for every endpoint
  pub base_url: String,
}

impl Default for Config {
  fn default() -> Self {
    Self { base_url: String::from("http://localhost:3000") }
  }
}

pub struct Services<'a> {
  pub team: sv::Team<'a>,
  pub user: sv::User<'a>,
  pub activity: sv::Activity<'a>,
  pub leaderboard: sv::Leaderboard<'a>,
  pub workout: sv::Workout<'a>,
}

pub struct AppState {
  pub db: DatabaseConnection,
  pub config: Config,
}

impl AppState {
  pub async fn new(db_url: &str) -> Self {
    Self::with_config(db_url, Config::default()).await
  }

  pub async fn with_config(db_url: &str, config: Config) -> Self {
    info!("Connecting to database...");
    let db =
      Database::connect(db_url).await.expect("Failed to connect to database");

    info!("Running migrations...");
    Migrator::up(&db, None).await.expect("Failed to run migrations");

    Self { db, config }
  }

  pub fn sv(&self) -> Services<'_> {
    Services {
      team: sv::Team::new(&self.db),
      user: sv::User::new(&self.db),
      activity: sv::Activity::new(&self.db),
      leaderboard: sv::Leaderboard::new(&self.db),
      workout: sv::Workout::new(&self.db),
    }
  }
}
