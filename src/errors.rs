// errors.rs
use astra::Response;
use thiserror::Error;

use crate::api::ApiError;

/// Errors originating from the server logic
/// (routing, missing resources, etc.) or downstream layers (listings API).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Listings API Error: {0}")]
    Upstream(#[from] ApiError),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
