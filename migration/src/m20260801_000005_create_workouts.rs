use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Workouts::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Workouts::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Workouts::Name).string().not_null())
          .col(ColumnDef::new(Workouts::Description).text().not_null())
          .col(
            ColumnDef::new(Workouts::ActivityType).string().not_null(),
          )
          .col(ColumnDef::new(Workouts::Difficulty).string().not_null())
          .col(ColumnDef::new(Workouts::Duration).integer().not_null())
          .col(
            ColumnDef::new(Workouts::CaloriesPerSession)
              .integer()
              .not_null(),
          )
          .col(ColumnDef::new(Workouts::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Workouts::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Workouts {
  Table,
  Id,
  Name,
  Description,
  ActivityType,
  Difficulty,
  Duration,
  CaloriesPerSession,
  CreatedAt,
}
