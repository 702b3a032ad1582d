//! Demo data seeding: wipes every table and recreates the superhero
//! catalog, then runs a leaderboard rebuild over the fresh data.

use rand::Rng;

use crate::{
  entity::{activity, leaderboard, team, user, workout},
  prelude::*,
  sv,
  sv::{
    activity::ActivityData, team::TeamData, user::UserData,
    workout::WorkoutData,
  },
};

const DEMO_PASSWORD: &str = "password123";

const MARVEL_HEROES: &[(&str, &str)] = &[
  ("Tony Stark", "ironman@marvel.com"),
  ("Steve Rogers", "captainamerica@marvel.com"),
  ("Thor Odinson", "thor@marvel.com"),
  ("Natasha Romanoff", "blackwidow@marvel.com"),
  ("Bruce Banner", "hulk@marvel.com"),
  ("Peter Parker", "spiderman@marvel.com"),
];

const DC_HEROES: &[(&str, &str)] = &[
  ("Clark Kent", "superman@dc.com"),
  ("Bruce Wayne", "batman@dc.com"),
  ("Diana Prince", "wonderwoman@dc.com"),
  ("Barry Allen", "flash@dc.com"),
  ("Arthur Curry", "aquaman@dc.com"),
  ("Hal Jordan", "greenlantern@dc.com"),
];

const ACTIVITY_TYPES: &[&str] =
  &["Running", "Cycling", "Swimming", "Weightlifting", "Yoga", "Boxing"];

/// Activity types that carry a distance
const DISTANCE_TYPES: &[&str] = &["Running", "Cycling", "Swimming"];

/// (name, description, activity_type, difficulty, duration, calories)
const WORKOUTS: &[(&str, &str, &str, &str, i32, i32)] = &[
  (
    "Super Soldier Training",
    "High-intensity training inspired by Captain America",
    "Weightlifting",
    "Hard",
    60,
    600,
  ),
  (
    "Speedster Sprint",
    "Lightning-fast running workout inspired by The Flash",
    "Running",
    "Medium",
    30,
    400,
  ),
  (
    "Amazonian Warrior Workout",
    "Combat training inspired by Wonder Woman",
    "Boxing",
    "Hard",
    45,
    550,
  ),
  (
    "Asgardian Strength",
    "Mythical strength training inspired by Thor",
    "Weightlifting",
    "Hard",
    90,
    800,
  ),
  (
    "Web-Slinger Agility",
    "Flexibility and agility workout inspired by Spider-Man",
    "Yoga",
    "Easy",
    45,
    300,
  ),
  (
    "Atlantean Swimming",
    "Aquatic conditioning inspired by Aquaman",
    "Swimming",
    "Medium",
    60,
    500,
  ),
  (
    "Dark Knight Cycling",
    "Endurance cycling inspired by Batman",
    "Cycling",
    "Medium",
    75,
    650,
  ),
  (
    "Kryptonian Power",
    "Maximum strength training inspired by Superman",
    "Weightlifting",
    "Hard",
    60,
    700,
  ),
];

#[derive(Debug)]
pub struct Summary {
  pub teams: u64,
  pub users: u64,
  pub activities: u64,
  pub entries: u64,
  pub workouts: u64,
}

/// Clears all five tables and inserts the demo catalog, finishing with a
/// full leaderboard rebuild.
pub async fn populate(db: &DatabaseConnection) -> Result<Summary> {
  info!("Clearing existing data...");
  clear(db).await?;

  info!("Inserting demo data...");

  let marvel = sv::Team::new(db)
    .create(TeamData {
      name: "Team Marvel".into(),
      description: "Assemble! The mightiest heroes of the Marvel Universe"
        .into(),
    })
    .await?;

  let dc = sv::Team::new(db)
    .create(TeamData {
      name: "Team DC".into(),
      description: "Justice League - Defending truth and justice".into(),
    })
    .await?;

  info!("Created teams: {}, {}", marvel.name, dc.name);

  let mut users = Vec::new();
  for (roster, team_id) in
    [(MARVEL_HEROES, marvel.id), (DC_HEROES, dc.id)]
  {
    for (name, email) in roster {
      let user = sv::User::new(db)
        .create(UserData {
          name: (*name).into(),
          email: (*email).into(),
          password: DEMO_PASSWORD.into(),
          team_id: Some(team_id),
        })
        .await?;
      users.push(user);
    }
  }

  info!("Created {} superhero users", users.len());

  let mut rng = rand::thread_rng();
  let now = Utc::now().naive_utc();
  let mut activities = 0u64;

  for user in &users {
    for _ in 0..rng.gen_range(5..=10) {
      let activity_type =
        ACTIVITY_TYPES[rng.gen_range(0..ACTIVITY_TYPES.len())];
      let duration = rng.gen_range(15..=120);
      let distance = DISTANCE_TYPES
        .contains(&activity_type)
        .then(|| round2(rng.gen_range(1.0..20.0)));
      let calories = duration * rng.gen_range(5..=15);
      let days_ago = rng.gen_range(0..=30);

      sv::Activity::new(db)
        .create(ActivityData {
          user_id: user.id,
          activity_type: activity_type.into(),
          duration,
          distance,
          calories,
          date: now - chrono::Duration::days(days_ago),
        })
        .await?;
      activities += 1;
    }
  }

  info!("Created {activities} activities");

  let entries = sv::Leaderboard::new(db).rebuild().await?;
  info!("Created {} leaderboard entries", entries.len());

  for (name, description, activity_type, difficulty, duration, calories) in
    WORKOUTS
  {
    sv::Workout::new(db)
      .create(WorkoutData {
        name: (*name).into(),
        description: (*description).into(),
        activity_type: (*activity_type).into(),
        difficulty: (*difficulty).into(),
        duration: *duration,
        calories_per_session: *calories,
      })
      .await?;
  }

  info!("Created {} superhero workouts", WORKOUTS.len());

  Ok(Summary {
    teams: sv::Team::new(db).count().await?,
    users: sv::User::new(db).count().await?,
    activities: sv::Activity::new(db).count().await?,
    entries: sv::Leaderboard::new(db).count().await?,
    workouts: sv::Workout::new(db).count().await?,
  })
}

async fn clear(db: &DatabaseConnection) -> Result<()> {
  activity::Entity::delete_many().exec(db).await?;
  leaderboard::Entity::delete_many().exec(db).await?;
  user::Entity::delete_many().exec(db).await?;
  team::Entity::delete_many().exec(db).await?;
  workout::Entity::delete_many().exec(db).await?;
  Ok(())
}

fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}
