use serde::Deserialize;

use crate::{
  entity::{team, user},
  prelude::*,
};

#[derive(Debug, Deserialize)]
pub struct UserData {
  pub name: String,
  pub email: String,
  pub password: String,
  #[serde(default)]
  pub team_id: Option<i32>,
}

pub struct User<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> User<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(&self, data: UserData) -> Result<user::Model> {
    self.ensure_email_free(&data.email, None).await?;
    self.ensure_team_exists(data.team_id).await?;

    let user = user::ActiveModel {
      name: Set(data.name),
      email: Set(data.email),
      password: Set(data.password),
      team_id: Set(data.team_id),
      created_at: Set(Utc::now().naive_utc()),
      ..Default::default()
    };

    Ok(user.insert(self.db).await?)
  }

  pub async fn by_id(&self, id: i32) -> Result<user::Model> {
    user::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::UserNotFound)
  }

  pub async fn all(&self) -> Result<Vec<user::Model>> {
    let users =
      user::Entity::find().order_by_asc(user::Column::Id).all(self.db).await?;
    Ok(users)
  }

  pub async fn update(&self, id: i32, data: UserData) -> Result<user::Model> {
    let user = self.by_id(id).await?;
    self.ensure_email_free(&data.email, Some(id)).await?;
    self.ensure_team_exists(data.team_id).await?;

    let user = user::ActiveModel {
      name: Set(data.name),
      email: Set(data.email),
      password: Set(data.password),
      team_id: Set(data.team_id),
      ..user.into()
    }
    .update(self.db)
    .await?;

    Ok(user)
  }

  pub async fn delete(&self, id: i32) -> Result<()> {
    let user = self.by_id(id).await?;
    user::Entity::delete_by_id(user.id).exec(self.db).await?;
    Ok(())
  }

  pub async fn count(&self) -> Result<u64> {
    Ok(user::Entity::find().count(self.db).await?)
  }

  async fn ensure_email_free(
    &self,
    email: &str,
    except: Option<i32>,
  ) -> Result<()> {
    let mut query = user::Entity::find().filter(user::Column::Email.eq(email));
    if let Some(id) = except {
      query = query.filter(user::Column::Id.ne(id));
    }

    if query.count(self.db).await? > 0 {
      return Err(Error::EmailTaken);
    }
    Ok(())
  }

  async fn ensure_team_exists(&self, team_id: Option<i32>) -> Result<()> {
    let Some(team_id) = team_id else {
      return Ok(());
    };

    if team::Entity::find_by_id(team_id).one(self.db).await?.is_none() {
      return Err(Error::UnknownTeam { team_id });
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use sea_orm::{ConnectionTrait, Database, DbBackend, Schema};

  use super::*;
  use crate::sv;
  use crate::sv::team::TeamData;

  async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    let schema = Schema::new(DbBackend::Sqlite);

    let stmt = schema.create_table_from_entity(team::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(user::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }

  fn data(name: &str, email: &str, team_id: Option<i32>) -> UserData {
    UserData {
      name: name.into(),
      email: email.into(),
      password: "password123".into(),
      team_id,
    }
  }

  #[tokio::test]
  async fn test_create_user() {
    let db = setup_test_db().await;

    let user = User::new(&db)
      .create(data("Tony Stark", "ironman@marvel.com", None))
      .await
      .unwrap();

    assert_eq!(user.email, "ironman@marvel.com");
    assert_eq!(user.team_id, None);
  }

  #[tokio::test]
  async fn test_duplicate_email_rejected() {
    let db = setup_test_db().await;
    let sv = User::new(&db);

    sv.create(data("Tony Stark", "ironman@marvel.com", None)).await.unwrap();

    assert!(matches!(
      sv.create(data("Impostor", "ironman@marvel.com", None)).await,
      Err(Error::EmailTaken)
    ));
  }

  #[tokio::test]
  async fn test_unknown_team_rejected() {
    let db = setup_test_db().await;

    let result = User::new(&db)
      .create(data("Clark Kent", "superman@dc.com", Some(99)))
      .await;

    assert!(matches!(result, Err(Error::UnknownTeam { team_id: 99 })));
  }

  #[tokio::test]
  async fn test_assign_existing_team() {
    let db = setup_test_db().await;

    let team = sv::Team::new(&db)
      .create(TeamData { name: "Team DC".into(), description: String::new() })
      .await
      .unwrap();

    let user = User::new(&db)
      .create(data("Clark Kent", "superman@dc.com", Some(team.id)))
      .await
      .unwrap();

    assert_eq!(user.team_id, Some(team.id));
  }
}
