//! The `wordbank` table: one row, fixed id, three JSONB list columns.
//!
//! Both writers are single `INSERT .. ON CONFLICT` statements, so seeding and
//! replacing are atomic at the database and never interleave field writes.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Primary key of the only word bank row.
pub const WORD_BANK_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wordbank")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub persons: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub places: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub things: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn row(persons: Json, places: Json, things: Json) -> ActiveModel {
    ActiveModel {
        id: Set(WORD_BANK_ID),
        persons: Set(Some(persons)),
        places: Set(Some(places)),
        things: Set(Some(things)),
    }
}

/// Insert the row only if it does not exist yet. Returns `true` when this call
/// created it.
pub async fn insert_if_absent(
    db: &DatabaseConnection,
    persons: Json,
    places: Json,
    things: Json,
) -> Result<bool, ModelError> {
    let inserted = Entity::insert(row(persons, places, things))
        .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;
    Ok(inserted > 0)
}

/// Set all three lists on the row, creating it if missing, and return the
/// stored result.
pub async fn upsert_lists(
    db: &DatabaseConnection,
    persons: Json,
    places: Json,
    things: Json,
) -> Result<Model, ModelError> {
    let stored = Entity::insert(row(persons, places, things))
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([Column::Persons, Column::Places, Column::Things])
                .to_owned(),
        )
        .exec_with_returning(db)
        .await?;
    Ok(stored)
}

pub async fn find(db: &DatabaseConnection) -> Result<Option<Model>, ModelError> {
    let found = Entity::find_by_id(WORD_BANK_ID).one(db).await?;
    Ok(found)
}
