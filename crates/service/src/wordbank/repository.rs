use async_trait::async_trait;

use super::domain::WordBank;
use crate::errors::ServiceError;

/// Persistence for the single word bank document.
///
/// Implementations must make `seed` an atomic insert-if-absent and `replace`
/// an atomic set-all-three-or-insert; neither may write lists one at a time.
#[async_trait]
pub trait WordBankStore: Send + Sync {
    /// Create the word bank with `defaults` if none exists. Returns `true`
    /// when this call created it; an existing word bank is left untouched.
    async fn seed(&self, defaults: &WordBank) -> Result<bool, ServiceError>;

    /// Current word bank. A missing document reads as three empty lists.
    async fn get(&self) -> Result<WordBank, ServiceError>;

    /// Replace all three lists at once, creating the document if needed, and
    /// return what was stored.
    async fn replace(&self, bank: WordBank) -> Result<WordBank, ServiceError>;
}

/// In-memory store for tests and local runs without Postgres
pub mod memory {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    pub struct MemoryWordBankStore {
        doc: RwLock<Option<WordBank>>,
        available: AtomicBool,
    }

    impl Default for MemoryWordBankStore {
        fn default() -> Self {
            Self { doc: RwLock::new(None), available: AtomicBool::new(true) }
        }
    }

    impl MemoryWordBankStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Start with an existing document, as if written by an earlier process.
        pub fn with_document(bank: WordBank) -> Self {
            Self { doc: RwLock::new(Some(bank)), available: AtomicBool::new(true) }
        }

        /// Simulate the backing store going away (`false`) or coming back.
        pub fn set_available(&self, available: bool) {
            self.available.store(available, Ordering::SeqCst);
        }

        /// Remove the document, as an external cleanup would.
        pub async fn clear(&self) {
            *self.doc.write().await = None;
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.available.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(ServiceError::Unavailable("connection refused".into()))
            }
        }
    }

    #[async_trait]
    impl WordBankStore for MemoryWordBankStore {
        async fn seed(&self, defaults: &WordBank) -> Result<bool, ServiceError> {
            self.check()?;
            let mut doc = self.doc.write().await;
            if doc.is_some() {
                return Ok(false);
            }
            *doc = Some(defaults.clone());
            Ok(true)
        }

        async fn get(&self) -> Result<WordBank, ServiceError> {
            self.check()?;
            Ok(self.doc.read().await.clone().unwrap_or_default())
        }

        async fn replace(&self, bank: WordBank) -> Result<WordBank, ServiceError> {
            self.check()?;
            let mut doc = self.doc.write().await;
            *doc = Some(bank.clone());
            Ok(bank)
        }
    }
}
