use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NeoWatchError {
    #[error("Please enter an asteroid ID or name")]
    EmptyQuery,

    #[error("Failed to fetch asteroid data")]
    FeedUnavailable(String),

    #[error("Failed to fetch asteroid data: Asteroid not found by ID. Try searching by name instead.")]
    NotFound(String),

    #[error("Failed to fetch asteroid data: {0}")]
    Http(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<NeoWatchError> for String {
    fn from(err: NeoWatchError) -> Self {
        err.to_string()
    }
}

impl From<reqwest::Error> for NeoWatchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            NeoWatchError::Decode(err.to_string())
        } else {
            NeoWatchError::Http(err.to_string())
        }
    }
}
