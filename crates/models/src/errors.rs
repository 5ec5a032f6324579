use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unencodable price: {0}")]
    Price(String),
    #[error("corrupt stored value: {0}")]
    Corrupt(String),
}
