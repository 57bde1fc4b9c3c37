use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request to a protected endpoint carried no `Authorization` header.
    #[error("Missing authorization token")]
    MissingToken,

    /// Token is empty, malformed, expired or signed with another key.
    #[error("Invalid authorization token")]
    InvalidToken,

    /// Login attempted with a password that does not match the stored hash.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token is valid but the user it names no longer exists.
    ///
    /// # Fields
    /// - Email carried by the token
    #[error("User with email {0} not found in database")]
    UserNotInDatabase(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized. `UserNotInDatabase` is logged at debug level
/// and answered with the same message as an invalid token so the response does not
/// reveal which accounts exist.
///
/// # Returns
/// - 401 Unauthorized - For all authentication errors
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::MissingToken => "Missing authorization token".to_string(),
            Self::InvalidToken => "Invalid authorization token".to_string(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                "Invalid authorization token".to_string()
            }
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto { error: message })).into_response()
    }
}
