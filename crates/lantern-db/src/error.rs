use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed post or comment does not exist.
    #[error("not found")]
    NotFound,

    #[error("storage driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("document encoding error: {0}")]
    Encoding(#[from] bson::ser::Error),
}
