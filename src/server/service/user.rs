//! User registration, authentication and account management.

use crate::{
    model::user::{LoginUserDto, RegisterUserDto, UpdateUserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, UpdateUserParams, User, UserFilter},
        service::auth::{password, token},
    },
};

const DUPLICATE_USER: &str = "Username or email already in use";

/// Service for user accounts and their credentials.
///
/// Owns a user repository and borrows the token signing secret. Every operation that
/// establishes or changes an identity returns a freshly issued bearer token.
pub struct UserService<'a, R> {
    repo: R,
    jwt_secret: &'a str,
}

impl<'a, R: UserRepository> UserService<'a, R> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `repo` - User repository implementation
    /// - `jwt_secret` - Secret used to sign issued tokens
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(repo: R, jwt_secret: &'a str) -> Self {
        Self { repo, jwt_secret }
    }

    /// Registers a new user and issues a token.
    ///
    /// # Arguments
    /// - `dto` - Username, email and clear text password
    ///
    /// # Returns
    /// - `Ok(String)` - Token for the new user
    /// - `Err(AppError::BadRequest)` - One or more fields are empty
    /// - `Err(AppError::Conflict)` - Username or email already in use
    /// - `Err(AppError)` - Hashing, signing or database failure
    pub async fn register(&self, dto: RegisterUserDto) -> Result<String, AppError> {
        require_fields(&[
            ("username", &dto.username),
            ("email", &dto.email),
            ("password", &dto.password),
        ])?;

        let password_hash = password::hash_password(&dto.password)?;

        let user = self
            .repo
            .create(CreateUserParams {
                username: dto.username,
                email: dto.email,
                password_hash,
            })
            .await
            .map_err(|e| AppError::from_write_error(e, DUPLICATE_USER))?;

        tracing::info!("Registered user {}", user.id);

        Ok(token::issue_token(
            self.jwt_secret,
            &user.username,
            &user.email,
        )?)
    }

    /// Checks credentials and issues a token.
    ///
    /// # Arguments
    /// - `dto` - Email and clear text password
    ///
    /// # Returns
    /// - `Ok(String)` - Token for the authenticated user
    /// - `Err(AppError::BadRequest)` - Email or password empty
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Wrong password
    pub async fn login(&self, dto: LoginUserDto) -> Result<String, AppError> {
        require_fields(&[("email", &dto.email), ("password", &dto.password)])?;

        let Some(user) = self.repo.find_by_email(&dto.email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !password::verify_password(&user.password_hash, &dto.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(token::issue_token(
            self.jwt_secret,
            &user.username,
            &user.email,
        )?)
    }

    /// Finds exactly one user matching the filter.
    ///
    /// # Returns
    /// - `Ok(User)` - The single matching user
    /// - `Err(AppError::NotFound)` - No match
    /// - `Err(AppError::AmbiguousResult)` - More than one match
    pub async fn find_one(&self, filter: UserFilter) -> Result<User, AppError> {
        let mut users = self.repo.find_by(filter.clone()).await?;

        match users.len() {
            0 => Err(AppError::NotFound(format!("No user found with {}", filter))),
            1 => Ok(users.remove(0)),
            n => Err(AppError::AmbiguousResult(format!(
                "{} users found with {}",
                n, filter
            ))),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    /// Updates the account identified by `email` and issues a token for the result.
    ///
    /// Empty strings in the payload keep the stored value. A supplied password is
    /// re-hashed. A supplied team must exist.
    ///
    /// # Arguments
    /// - `email` - Current email of the account, taken from the caller's token
    /// - `dto` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(String)` - Token for the possibly changed identity
    /// - `Err(AppError::NotFound)` - Account or team doesn't exist
    /// - `Err(AppError::Conflict)` - New username or email already in use
    pub async fn update(&self, email: &str, dto: UpdateUserDto) -> Result<String, AppError> {
        let Some(user) = self.repo.find_by_email(email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if let Some(team_id) = dto.id_team {
            if !self.repo.team_exists(team_id).await? {
                return Err(AppError::NotFound(format!("Team {} not found", team_id)));
            }
        }

        let password_hash = match non_empty(dto.password) {
            Some(password) => Some(password::hash_password(&password)?),
            None => None,
        };

        let params = UpdateUserParams {
            username: non_empty(dto.user_name),
            email: non_empty(dto.email),
            password_hash,
            team_id: dto.id_team,
        };

        let updated = self
            .repo
            .update(user.id, params)
            .await
            .map_err(|e| AppError::from_write_error(e, DUPLICATE_USER))?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(token::issue_token(
            self.jwt_secret,
            &updated.username,
            &updated.email,
        )?)
    }

    /// Deletes a user together with their bombs and inventory.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: uuid::Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

/// Rejects the payload if any named field is empty, listing all empty fields.
fn require_fields(fields: &[(&str, &String)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
