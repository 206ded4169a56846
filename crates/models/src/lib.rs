pub mod errors;
pub mod db;
pub mod wordbank;

#[cfg(test)]
mod tests;
