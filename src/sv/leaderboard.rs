use serde::Deserialize;

use crate::{
  entity::{activity, leaderboard, team, user},
  prelude::*,
};

/// Per-user rollup of activity totals plus rank.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
  pub user_id: i32,
  pub team_id: Option<i32>,
  pub total_calories: i32,
  /// Total duration in minutes
  pub total_duration: i32,
  /// Total distance in km
  pub total_distance: f64,
  /// Dense 1-based rank, assigned by [`compute_standings`]
  pub rank: i32,
}

/// Computes one standing per user over a snapshot of activity records.
///
/// Totals are plain sums; an absent distance contributes zero. A user
/// with no activities gets zero totals and still participates in the
/// ranking. Ranks are dense and 1-based, ordered by descending total
/// calories with ties broken by ascending user id, so repeated runs over
/// the same input produce the same board.
///
/// An activity naming a user missing from `users`, or a user naming a
/// team missing from `teams`, aborts the computation instead of silently
/// producing an orphaned entry.
pub fn compute_standings(
  teams: &[team::Model],
  users: &[user::Model],
  activities: &[activity::Model],
) -> Result<Vec<Standing>> {
  let known_teams: HashSet<i32> = teams.iter().map(|team| team.id).collect();

  let mut totals = HashMap::with_capacity(users.len());
  for user in users {
    if let Some(team_id) = user.team_id
      && !known_teams.contains(&team_id)
    {
      return Err(Error::UnknownTeam { team_id });
    }

    totals.insert(user.id, Standing {
      user_id: user.id,
      team_id: user.team_id,
      total_calories: 0,
      total_duration: 0,
      total_distance: 0.0,
      rank: 0,
    });
  }

  for activity in activities {
    let Some(standing) = totals.get_mut(&activity.user_id) else {
      return Err(Error::UnknownUser { user_id: activity.user_id });
    };

    standing.total_calories += activity.calories;
    standing.total_duration += activity.duration;
    standing.total_distance += activity.distance.unwrap_or(0.0);
  }

  let mut standings: Vec<_> = totals.into_values().collect();
  standings.sort_by(|a, b| {
    b.total_calories.cmp(&a.total_calories).then(a.user_id.cmp(&b.user_id))
  });

  for (position, standing) in standings.iter_mut().enumerate() {
    standing.rank = (position + 1) as i32;
  }

  Ok(standings)
}

#[derive(Debug, Deserialize)]
pub struct EntryData {
  pub user_id: i32,
  #[serde(default)]
  pub team_id: Option<i32>,
  #[serde(default)]
  pub total_calories: i32,
  #[serde(default)]
  pub total_duration: i32,
  #[serde(default)]
  pub total_distance: f64,
  #[serde(default)]
  pub rank: i32,
}

pub struct Leaderboard<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Leaderboard<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Recomputes the whole board in one transaction: snapshot teams,
  /// users and activities, aggregate, then replace every stored entry
  /// with the fresh set. Readers never observe a half-written board.
  pub async fn rebuild(&self) -> Result<Vec<leaderboard::Model>> {
    let txn = self.db.begin().await?;

    let teams = team::Entity::find().all(&txn).await?;
    let users = user::Entity::find().all(&txn).await?;
    let activities = activity::Entity::find().all(&txn).await?;

    let standings = compute_standings(&teams, &users, &activities)?;
    let now = Utc::now().naive_utc();

    leaderboard::Entity::delete_many().exec(&txn).await?;

    let mut entries = Vec::with_capacity(standings.len());
    for standing in standings {
      let entry = leaderboard::ActiveModel {
        user_id: Set(standing.user_id),
        team_id: Set(standing.team_id),
        total_calories: Set(standing.total_calories),
        total_duration: Set(standing.total_duration),
        total_distance: Set(standing.total_distance),
        rank: Set(standing.rank),
        updated_at: Set(now),
        ..Default::default()
      };
      entries.push(entry.insert(&txn).await?);
    }

    txn.commit().await?;

    info!("Rebuilt leaderboard with {} entries", entries.len());
    Ok(entries)
  }

  pub async fn create(&self, data: EntryData) -> Result<leaderboard::Model> {
    self.ensure_refs_exist(data.user_id, data.team_id).await?;

    let entry = leaderboard::ActiveModel {
      user_id: Set(data.user_id),
      team_id: Set(data.team_id),
      total_calories: Set(data.total_calories),
      total_duration: Set(data.total_duration),
      total_distance: Set(data.total_distance),
      rank: Set(data.rank),
      updated_at: Set(Utc::now().naive_utc()),
      ..Default::default()
    };

    Ok(entry.insert(self.db).await?)
  }

  pub async fn by_id(&self, id: i32) -> Result<leaderboard::Model> {
    leaderboard::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::EntryNotFound)
  }

  /// Stored entries ordered by ascending rank.
  pub async fn all(&self) -> Result<Vec<leaderboard::Model>> {
    let entries = leaderboard::Entity::find()
      .order_by_asc(leaderboard::Column::Rank)
      .all(self.db)
      .await?;
    Ok(entries)
  }

  pub async fn update(
    &self,
    id: i32,
    data: EntryData,
  ) -> Result<leaderboard::Model> {
    let entry = self.by_id(id).await?;
    self.ensure_refs_exist(data.user_id, data.team_id).await?;

    let entry = leaderboard::ActiveModel {
      user_id: Set(data.user_id),
      team_id: Set(data.team_id),
      total_calories: Set(data.total_calories),
      total_duration: Set(data.total_duration),
      total_distance: Set(data.total_distance),
      rank: Set(data.rank),
      updated_at: Set(Utc::now().naive_utc()),
      ..entry.into()
    }
    .update(self.db)
    .await?;

    Ok(entry)
  }

  pub async fn delete(&self, id: i32) -> Result<()> {
    let entry = self.by_id(id).await?;
    leaderboard::Entity::delete_by_id(entry.id).exec(self.db).await?;
    Ok(())
  }

  pub async fn count(&self) -> Result<u64> {
    Ok(leaderboard::Entity::find().count(self.db).await?)
  }

  async fn ensure_refs_exist(
    &self,
    user_id: i32,
    team_id: Option<i32>,
  ) -> Result<()> {
    if user::Entity::find_by_id(user_id).one(self.db).await?.is_none() {
      return Err(Error::UnknownUser { user_id });
    }

    if let Some(team_id) = team_id
      && team::Entity::find_by_id(team_id).one(self.db).await?.is_none()
    {
      return Err(Error::UnknownTeam { team_id });
    }
    Ok(())
  }
}
