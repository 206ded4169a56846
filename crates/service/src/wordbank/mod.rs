//! Word bank: domain record, store abstraction, service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Word, WordBank};
pub use repository::WordBankStore;
pub use service::WordBankService;
