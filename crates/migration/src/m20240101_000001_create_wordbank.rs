//! Create `wordbank` table.
//!
//! Holds a single row (fixed id) whose three JSONB columns are the word lists.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wordbank::Table)
                    .if_not_exists()
                    .col(integer(Wordbank::Id).primary_key())
                    .col(json_binary_null(Wordbank::Persons))
                    .col(json_binary_null(Wordbank::Places))
                    .col(json_binary_null(Wordbank::Things))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Wordbank::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Wordbank { Table, Id, Persons, Places, Things }
