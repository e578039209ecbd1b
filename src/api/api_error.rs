use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Listings API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Response decode error: {0}")]
    Decode(String),
    #[error("Invalid API endpoint: {0}")]
    Endpoint(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
