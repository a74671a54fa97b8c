use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Cached rows could not be converted to or from the requested type.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}
