#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("{operation} failed with status {status}: {detail}")]
    Api {
        operation: &'static str,
        status: u16,
        detail: String,
    },
    #[cfg(feature = "client")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response has no `Data` field")]
    MissingData,
    #[error("Configuration error: {0}")]
    Config(String),
}
