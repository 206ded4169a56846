use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}
