use serde::Deserialize;

use crate::{entity::team, prelude::*};

#[derive(Debug, Deserialize)]
pub struct TeamData {
  pub name: String,
  #[serde(default)]
  pub description: String,
}

pub struct Team<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Team<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(&self, data: TeamData) -> Result<team::Model> {
    self.ensure_name_free(&data.name, None).await?;

    let team = team::ActiveModel {
      name: Set(data.name),
      description: Set(data.description),
      created_at: Set(Utc::now().naive_utc()),
      ..Default::default()
    };

    Ok(team.insert(self.db).await?)
  }

  pub async fn by_id(&self, id: i32) -> Result<team::Model> {
    team::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::TeamNotFound)
  }

  pub async fn all(&self) -> Result<Vec<team::Model>> {
    let teams =
      team::Entity::find().order_by_asc(team::Column::Id).all(self.db).await?;
    Ok(teams)
  }

  pub async fn update(&self, id: i32, data: TeamData) -> Result<team::Model> {
    let team = self.by_id(id).await?;
    self.ensure_name_free(&data.name, Some(id)).await?;

    let team = team::ActiveModel {
      name: Set(data.name),
      description: Set(data.description),
      ..team.into()
    }
    .update(self.db)
    .await?;

    Ok(team)
  }

  pub async fn delete(&self, id: i32) -> Result<()> {
    let team = self.by_id(id).await?;
    team::Entity::delete_by_id(team.id).exec(self.db).await?;
    Ok(())
  }

  pub async fn count(&self) -> Result<u64> {
    Ok(team::Entity::find().count(self.db).await?)
  }

  async fn ensure_name_free(
    &self,
    name: &str,
    except: Option<i32>,
  ) -> Result<()> {
    let mut query = team::Entity::find().filter(team::Column::Name.eq(name));
    if let Some(id) = except {
      query = query.filter(team::Column::Id.ne(id));
    }

    if query.count(self.db).await? > 0 {
      return Err(Error::TeamNameTaken);
    }
    Ok(())
  }
}
