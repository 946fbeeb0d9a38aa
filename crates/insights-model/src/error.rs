use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid canonical zip code: {0:?}")]
    InvalidZipCode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
