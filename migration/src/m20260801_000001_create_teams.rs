use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Teams::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Teams::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(
            ColumnDef::new(Teams::Name).string().not_null().unique_key(),
          )
          .col(
            ColumnDef::new(Teams::Description)
              .text()
              .not_null()
              .default(""),
          )
          .col(ColumnDef::new(Teams::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Teams::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Teams {
  Table,
  Id,
  Name,
  Description,
  CreatedAt,
}
