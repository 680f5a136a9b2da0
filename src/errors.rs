#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request cannot be carried out as configured. Raised before any
    /// cache or network access.
    #[error("Invalid fetch request: {0}")]
    InvalidConfig(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },
}
