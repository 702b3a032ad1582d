//! Management command: runs migrations, wipes the database and seeds the
//! demo catalog, finishing with a leaderboard rebuild.

use std::env;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use fittrack::prelude::*;
use fittrack::seed;
use fittrack::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fittrack=info,sea_orm=warn".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_url = env::var("DATABASE_URL")
    .unwrap_or_else(|_| "sqlite:fittrack.db?mode=rwc".into());

  let app = AppState::new(&db_url).await;
  let summary = seed::populate(&app.db).await?;

  info!("Database population complete!");
  info!("  - Teams: {}", summary.teams);
  info!("  - Users: {}", summary.users);
  info!("  - Activities: {}", summary.activities);
  info!("  - Leaderboard entries: {}", summary.entries);
  info!("  - Workouts: {}", summary.workouts);

  Ok(())
}
