use sea_orm_migration::prelude::*;

use super::m20260801_000001_create_teams::Teams;
use super::m20260801_000002_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Leaderboard::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Leaderboard::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Leaderboard::UserId).integer().not_null())
          .col(ColumnDef::new(Leaderboard::TeamId).integer().null())
          .col(
            ColumnDef::new(Leaderboard::TotalCalories)
              .integer()
              .not_null()
              .default(0),
          )
          .col(
            ColumnDef::new(Leaderboard::TotalDuration)
              .integer()
              .not_null()
              .default(0),
          )
          .col(
            ColumnDef::new(Leaderboard::TotalDistance)
              .double()
              .not_null()
              .default(0.0),
          )
          .col(
            ColumnDef::new(Leaderboard::Rank)
              .integer()
              .not_null()
              .default(0),
          )
          .col(
            ColumnDef::new(Leaderboard::UpdatedAt).date_time().not_null(),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_leaderboard_user")
              .from(Leaderboard::Table, Leaderboard::UserId)
              .to(Users::Table, Users::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_leaderboard_team")
              .from(Leaderboard::Table, Leaderboard::TeamId)
              .to(Teams::Table, Teams::Id)
              .on_delete(ForeignKeyAction::SetNull),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Leaderboard::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Leaderboard {
  Table,
  Id,
  UserId,
  TeamId,
  TotalCalories,
  TotalDuration,
  TotalDistance,
  Rank,
  UpdatedAt,
}
