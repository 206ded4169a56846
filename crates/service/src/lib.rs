//! Service layer for the shared word bank.
//! - `WordBankStore` is the persistence seam (Postgres or in-memory).
//! - `WordBankService` normalises input and logs around the store.

pub mod errors;
pub mod wordbank;
