/// Postgres-backed checks of the `wordbank` helpers
pub mod wordbank_tests;
