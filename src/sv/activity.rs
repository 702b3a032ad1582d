use serde::Deserialize;

use crate::{
  entity::{activity, user},
  prelude::*,
};

#[derive(Debug, Deserialize)]
pub struct ActivityData {
  pub user_id: i32,
  pub activity_type: String,
  /// Duration in minutes
  pub duration: i32,
  /// Distance in km, absent for stationary activities
  #[serde(default)]
  pub distance: Option<f64>,
  pub calories: i32,
  pub date: DateTime,
}

pub struct Activity<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Activity<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(&self, data: ActivityData) -> Result<activity::Model> {
    self.ensure_user_exists(data.user_id).await?;

    let activity = activity::ActiveModel {
      user_id: Set(data.user_id),
      activity_type: Set(data.activity_type),
      duration: Set(data.duration),
      distance: Set(data.distance),
      calories: Set(data.calories),
      date: Set(data.date),
      created_at: Set(Utc::now().naive_utc()),
      ..Default::default()
    };

    Ok(activity.insert(self.db).await?)
  }

  pub async fn by_id(&self, id: i32) -> Result<activity::Model> {
    activity::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::ActivityNotFound)
  }

  pub async fn all(&self) -> Result<Vec<activity::Model>> {
    let activities = activity::Entity::find()
      .order_by_asc(activity::Column::Id)
      .all(self.db)
      .await?;
    Ok(activities)
  }

  pub async fn by_user(&self, user_id: i32) -> Result<Vec<activity::Model>> {
    let activities = activity::Entity::find()
      .filter(activity::Column::UserId.eq(user_id))
      .order_by_asc(activity::Column::Date)
      .all(self.db)
      .await?;
    Ok(activities)
  }

  pub async fn update(
    &self,
    id: i32,
    data: ActivityData,
  ) -> Result<activity::Model> {
    let activity = self.by_id(id).await?;
    self.ensure_user_exists(data.user_id).await?;

    let activity = activity::ActiveModel {
      user_id: Set(data.user_id),
      activity_type: Set(data.activity_type),
      duration: Set(data.duration),
      distance: Set(data.distance),
      calories: Set(data.calories),
      date: Set(data.date),
      ..activity.into()
    }
    .update(self.db)
    .await?;

    Ok(activity)
  }

  pub async fn delete(&self, id: i32) -> Result<()> {
    let activity = self.by_id(id).await?;
    activity::Entity::delete_by_id(activity.id).exec(self.db).await?;
    Ok(())
  }

  pub async fn count(&self) -> Result<u64> {
    Ok(activity::Entity::find().count(self.db).await?)
  }

  async fn ensure_user_exists(&self, user_id: i32) -> Result<()> {
    if user::Entity::find_by_id(user_id).one(self.db).await?.is_none() {
      return Err(Error::UnknownUser { user_id });
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use sea_orm::{ConnectionTrait, Database, DbBackend, Schema};

  use super::*;
  use crate::entity::team;
  use crate::sv;
  use crate::sv::user::UserData;

  async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    let schema = Schema::new(DbBackend::Sqlite);

    let stmt = schema.create_table_from_entity(team::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(user::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(activity::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }

  async fn create_user(db: &DatabaseConnection, email: &str) -> i32 {
    let user = sv::User::new(db)
      .create(UserData {
        name: "Test Hero".into(),
        email: email.into(),
        password: "password123".into(),
        team_id: None,
      })
      .await
      .unwrap();
    user.id
  }

  fn running(user_id: i32) -> ActivityData {
    ActivityData {
      user_id,
      activity_type: "Running".into(),
      duration: 30,
      distance: Some(5.0),
      calories: 300,
      date: Utc::now().naive_utc(),
    }
  }

  #[tokio::test]
  async fn test_create_activity() {
    let db = setup_test_db().await;
    let user_id = create_user(&db, "hero@test.com").await;

    let activity = Activity::new(&db).create(running(user_id)).await.unwrap();

    assert_eq!(activity.activity_type, "Running");
    assert_eq!(activity.duration, 30);
    assert_eq!(activity.calories, 300);
  }

  #[tokio::test]
  async fn test_unknown_user_rejected() {
    let db = setup_test_db().await;

    assert!(matches!(
      Activity::new(&db).create(running(7)).await,
      Err(Error::UnknownUser { user_id: 7 })
    ));
  }

  #[tokio::test]
  async fn test_by_user_filters() {
    let db = setup_test_db().await;
    let first = create_user(&db, "first@test.com").await;
    let second = create_user(&db, "second@test.com").await;

    let sv = Activity::new(&db);
    sv.create(running(first)).await.unwrap();
    sv.create(running(first)).await.unwrap();
    sv.create(running(second)).await.unwrap();

    assert_eq!(sv.by_user(first).await.unwrap().len(), 2);
    assert_eq!(sv.by_user(second).await.unwrap().len(), 1);
  }
}
