use serde::Deserialize;

use crate::{entity::workout, prelude::*};

#[derive(Debug, Deserialize)]
pub struct WorkoutData {
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub activity_type: String,
  pub difficulty: String,
  /// Recommended duration in minutes
  pub duration: i32,
  pub calories_per_session: i32,
}

pub struct Workout<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Workout<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(&self, data: WorkoutData) -> Result<workout::Model> {
    let workout = workout::ActiveModel {
      name: Set(data.name),
      description: Set(data.description),
      activity_type: Set(data.activity_type),
      difficulty: Set(data.difficulty),
      duration: Set(data.duration),
      calories_per_session: Set(data.calories_per_session),
      created_at: Set(Utc::now().naive_utc()),
      ..Default::default()
    };

    Ok(workout.insert(self.db).await?)
  }

  pub async fn by_id(&self, id: i32) -> Result<workout::Model> {
    workout::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::WorkoutNotFound)
  }

  pub async fn all(&self) -> Result<Vec<workout::Model>> {
    let workouts = workout::Entity::find()
      .order_by_asc(workout::Column::Id)
      .all(self.db)
      .await?;
    Ok(workouts)
  }

  pub async fn update(
    &self,
    id: i32,
    data: WorkoutData,
  ) -> Result<workout::Model> {
    let workout = self.by_id(id).await?;

    let workout = workout::ActiveModel {
      name: Set(data.name),
      description: Set(data.description),
      activity_type: Set(data.activity_type),
      difficulty: Set(data.difficulty),
      duration: Set(data.duration),
      calories_per_session: Set(data.calories_per_session),
      ..workout.into()
    }
    .update(self.db)
    .await?;

    Ok(workout)
  }

  pub async fn delete(&self, id: i32) -> Result<()> {
    let workout = self.by_id(id).await?;
    workout::Entity::delete_by_id(workout.id).exec(self.db).await?;
    Ok(())
  }

  pub async fn count(&self) -> Result<u64> {
    Ok(workout::Entity::find().count(self.db).await?)
  }
}

#[cfg(test)]
mod tests {
  use sea_orm::{ConnectionTrait, Database, DbBackend, Schema};

  use super::*;

  async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    let schema = Schema::new(DbBackend::Sqlite);
    let stmt = schema.create_table_from_entity(workout::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }

  #[tokio::test]
  async fn test_workout_crud() {
    let db = setup_test_db().await;
    let sv = Workout::new(&db);

    let workout = sv
      .create(WorkoutData {
        name: "Speedster Sprint".into(),
        description: "Lightning-fast running workout".into(),
        activity_type: "Running".into(),
        difficulty: "Medium".into(),
        duration: 30,
        calories_per_session: 400,
      })
      .await
      .unwrap();

    assert_eq!(sv.by_id(workout.id).await.unwrap().name, "Speedster Sprint");

    sv.delete(workout.id).await.unwrap();
    assert!(matches!(sv.by_id(workout.id).await, Err(Error::WorkoutNotFound)));
  }
}
