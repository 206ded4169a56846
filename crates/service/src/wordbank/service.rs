use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::wordbank::domain::WordBank;
use crate::wordbank::repository::WordBankStore;

/// Application service in front of the word bank store.
/// Holds no state of its own; every call goes straight to the store.
#[derive(Clone)]
pub struct WordBankService {
    store: Arc<dyn WordBankStore>,
}

impl WordBankService {
    pub fn new(store: Arc<dyn WordBankStore>) -> Self { Self { store } }

    /// Ensure the word bank exists, writing the built-in defaults if not.
    #[instrument(skip(self))]
    pub async fn seed(&self) -> Result<bool, ServiceError> {
        let seeded = self.store.seed(&WordBank::defaults()).await?;
        info!(seeded, "word bank seed checked");
        Ok(seeded)
    }

    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<WordBank, ServiceError> {
        let bank = self.store.get().await?;
        info!(persons = bank.persons.len(), places = bank.places.len(), things = bank.things.len(), "word bank read");
        Ok(bank)
    }

    /// Replace the whole word bank; lists the caller left out are already
    /// empty on `bank`, so nothing is merged with the previous contents.
    #[instrument(skip(self, bank), fields(words = bank.len()))]
    pub async fn replace(&self, bank: WordBank) -> Result<WordBank, ServiceError> {
        let stored = self.store.replace(bank).await?;
        info!(persons = stored.persons.len(), places = stored.places.len(), things = stored.things.len(), "word bank replaced");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::repository::memory::MemoryWordBankStore;

    #[tokio::test]
    async fn seed_then_get_returns_defaults() -> Result<(), ServiceError> {
        let svc = WordBankService::new(Arc::new(MemoryWordBankStore::new()));
        assert!(svc.seed().await?);
        assert!(!svc.seed().await?);
        assert_eq!(svc.get().await?, WordBank::defaults());
        Ok(())
    }

    #[tokio::test]
    async fn replace_is_total() -> Result<(), ServiceError> {
        let svc = WordBankService::new(Arc::new(MemoryWordBankStore::new()));
        svc.seed().await?;
        svc.replace(WordBank::new(vec!["X".into(), "Y".into()], vec!["P".into()], vec![])).await?;
        let stored = svc.replace(WordBank::new(vec!["Z".into()], vec![], vec![])).await?;
        assert_eq!(stored, WordBank::new(vec!["Z".into()], vec![], vec![]));
        assert_eq!(svc.get().await?, stored);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_replaces_leave_one_whole_value() -> Result<(), ServiceError> {
        let svc = WordBankService::new(Arc::new(MemoryWordBankStore::new()));
        let candidates: Vec<WordBank> = (0..8)
            .map(|i| {
                let w = format!("w{i}");
                WordBank::new(vec![w.clone().into()], vec![w.clone().into()], vec![w.into()])
            })
            .collect();
        let mut handles = Vec::new();
        for bank in candidates.clone() {
            let svc = svc.clone();
            handles.push(tokio::spawn(async move { svc.replace(bank).await }));
        }
        for h in handles {
            h.await.expect("join")?;
        }
        let last = svc.get().await?;
        assert!(candidates.contains(&last));
        Ok(())
    }
}
