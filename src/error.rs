/// Errors raised while querying OMDb and reporting the results
#[derive(thiserror::Error, Debug)]
pub enum OmdbError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type OmdbResult<T> = Result<T, OmdbError>;
