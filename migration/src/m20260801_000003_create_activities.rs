use sea_orm_migration::prelude::*;

use super::m20260801_000002_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Activities::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Activities::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Activities::UserId).integer().not_null())
          .col(
            ColumnDef::new(Activities::ActivityType).string().not_null(),
          )
          .col(ColumnDef::new(Activities::Duration).integer().not_null())
          .col(ColumnDef::new(Activities::Distance).double().null())
          .col(ColumnDef::new(Activities::Calories).integer().not_null())
          .col(ColumnDef::new(Activities::Date).date_time().not_null())
          .col(
            ColumnDef::new(Activities::CreatedAt).date_time().not_null(),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_activities_user")
              .from(Activities::Table, Activities::UserId)
              .to(Users::Table, Users::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Activities::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Activities {
  Table,
  Id,
  UserId,
  ActivityType,
  Duration,
  Distance,
  Calories,
  Date,
  CreatedAt,
}
