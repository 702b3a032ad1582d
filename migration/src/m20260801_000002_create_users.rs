use sea_orm_migration::prelude::*;

use super::m20260801_000001_create_teams::Teams;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Users::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Users::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Users::Name).string().not_null())
          .col(
            ColumnDef::new(Users::Email).string().not_null().unique_key(),
          )
          .col(ColumnDef::new(Users::Password).string().not_null())
          .col(ColumnDef::new(Users::TeamId).integer().null())
          .col(ColumnDef::new(Users::CreatedAt).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_users_team")
              .from(Users::Table, Users::TeamId)
              .to(Teams::Table, Teams::Id)
              .on_delete(ForeignKeyAction::SetNull),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Users {
  Table,
  Id,
  Name,
  Email,
  Password,
  TeamId,
  CreatedAt,
}
