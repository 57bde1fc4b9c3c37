use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{SeaUserRepository, UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token,
};

/// Identifies the caller of a protected endpoint from its bearer token.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
    jwt_secret: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap, jwt_secret: &'a str) -> Self {
        Self {
            db,
            headers,
            jwt_secret,
        }
    }

    /// Requires a valid token naming an existing user.
    ///
    /// # Returns
    /// - `Ok(User)` - The caller
    /// - `Err(AuthError::MissingToken)` - No `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Header unreadable or token rejected
    /// - `Err(AuthError::UserNotInDatabase)` - Token names a deleted user
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let header = header.to_str().map_err(|_| AuthError::InvalidToken)?;
        let claims = token::parse_token(self.jwt_secret, header)?;

        let user_repo = SeaUserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&claims.email).await? else {
            return Err(AuthError::UserNotInDatabase(claims.email).into());
        };

        Ok(user)
    }
}
