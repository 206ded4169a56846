use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::wordbank::domain::WordBank;
use crate::wordbank::repository::WordBankStore;

/// Postgres-backed store over the `wordbank` table.
#[derive(Clone)]
pub struct SeaOrmWordBankStore {
    pub db: DatabaseConnection,
}

impl SeaOrmWordBankStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn into_domain(m: models::wordbank::Model) -> WordBank {
    WordBank::from_columns(m.persons, m.places, m.things)
}

#[async_trait::async_trait]
impl WordBankStore for SeaOrmWordBankStore {
    async fn seed(&self, defaults: &WordBank) -> Result<bool, ServiceError> {
        let (persons, places, things) = defaults.to_columns();
        let inserted = models::wordbank::insert_if_absent(&self.db, persons, places, things).await?;
        Ok(inserted)
    }

    async fn get(&self) -> Result<WordBank, ServiceError> {
        let found = models::wordbank::find(&self.db).await?;
        Ok(found.map(into_domain).unwrap_or_default())
    }

    async fn replace(&self, bank: WordBank) -> Result<WordBank, ServiceError> {
        let (persons, places, things) = bank.to_columns();
        let stored = models::wordbank::upsert_lists(&self.db, persons, places, things).await?;
        Ok(into_domain(stored))
    }
}
