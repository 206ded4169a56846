use crate::db::connect;
use crate::wordbank::{self, Entity, WORD_BANK_ID};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::EntityTrait;
use serde_json::json;

fn db_tests_disabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}

/// The row is shared state, so the whole lifecycle runs in one test.
#[tokio::test]
async fn test_seed_upsert_find_lifecycle() -> Result<()> {
    if db_tests_disabled() {
        println!("Skipping database tests (no DATABASE_URL or SKIP_DB_TESTS set)");
        return Ok(());
    }

    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Entity::delete_by_id(WORD_BANK_ID).exec(&db).await?;

    // empty table
    assert!(wordbank::find(&db).await?.is_none());

    // first seed inserts, second is a no-op
    let inserted = wordbank::insert_if_absent(&db, json!(["a"]), json!(["b"]), json!(["c"])).await?;
    assert!(inserted);
    let again = wordbank::insert_if_absent(&db, json!(["x"]), json!(["y"]), json!(["z"])).await?;
    assert!(!again);
    let row = wordbank::find(&db).await?.expect("seeded row");
    assert_eq!(row.persons, Some(json!(["a"])));

    // upsert replaces all three columns and returns the stored row
    let stored = wordbank::upsert_lists(&db, json!(["Z"]), json!([]), json!(["T1", "T2"])).await?;
    assert_eq!(stored.id, WORD_BANK_ID);
    assert_eq!(stored.persons, Some(json!(["Z"])));
    assert_eq!(stored.places, Some(json!([])));
    assert_eq!(stored.things, Some(json!(["T1", "T2"])));

    // upsert also creates the row when missing
    Entity::delete_by_id(WORD_BANK_ID).exec(&db).await?;
    let created = wordbank::upsert_lists(&db, json!(["P"]), json!(["Q"]), json!(["R"])).await?;
    assert_eq!(created.places, Some(json!(["Q"])));
    let count = Entity::find().all(&db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}
