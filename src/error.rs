use reqwest::StatusCode;

use crate::models::promotion::ErrorDetail;

/// Failure of one REST call, split by whether a usable response arrived.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response: connection refused,
    /// broken body stream, unparseable success payload.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status; `detail` holds whatever
    /// structured message could be recovered from the body.
    #[error("server returned {status}")]
    Status { status: StatusCode, detail: ErrorDetail },
}

impl ApiError {
    /// Structured detail for non-2xx responses, `None` for transport failures.
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Status { detail, .. } => Some(detail),
        }
    }
}
