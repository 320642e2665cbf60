use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::warning;

/// Every way a login handshake can end without a track list.
///
/// All variants are terminal for the request. The response body is the
/// error message serialized as a bare JSON string.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid state or no matching authorization request")]
    InvalidState,

    #[error("authorization denied by provider: {0}")]
    AuthorizationDenied(String),

    #[error("missing authorization code")]
    MissingCode,

    #[error("failed to obtain access token: {0}")]
    TokenExchangeFailed(String),

    #[error("token response did not contain an access token")]
    NilToken,

    #[error("received an invalid or expired access token")]
    InvalidToken,

    #[error("failed to fetch top tracks: {0}")]
    UpstreamFetchFailed(String),

    #[error("failed to decode top tracks response: {0}")]
    DecodeFailed(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidState | RelayError::AuthorizationDenied(_) | RelayError::MissingCode => {
                StatusCode::BAD_REQUEST
            }
            RelayError::TokenExchangeFailed(_)
            | RelayError::NilToken
            | RelayError::InvalidToken
            | RelayError::UpstreamFetchFailed(_)
            | RelayError::DecodeFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        warning!("{} {}", status.as_u16(), message);

        (status, Json(message)).into_response()
    }
}
