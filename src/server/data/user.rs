//! User data repository for database operations.
//!
//! This module provides the `UserRepository` trait and its SeaORM implementation for
//! managing user records. Uniqueness of username and email is enforced by the schema;
//! violations surface as `DbErr` and are classified by the service layer.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::user::{CreateUserParams, UpdateUserParams, User, UserFilter};

/// Persistence operations for users.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Inserts a new user.
    async fn create(&self, params: CreateUserParams) -> Result<User, DbErr>;

    /// Returns every user matching the filter.
    ///
    /// Callers decide how to treat zero or multiple matches.
    async fn find_by(&self, filter: UserFilter) -> Result<Vec<User>, DbErr>;

    /// Finds a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr>;

    /// Lists all users, oldest first.
    async fn find_all(&self) -> Result<Vec<User>, DbErr>;

    /// Overwrites the supplied fields. Returns `None` if the user doesn't exist.
    async fn update(&self, id: Uuid, params: UpdateUserParams) -> Result<Option<User>, DbErr>;

    /// Deletes a user along with their bombs and inventory. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, DbErr>;

    /// Checks whether the referenced team exists.
    async fn team_exists(&self, team_id: Uuid) -> Result<bool, DbErr>;
}

/// SeaORM implementation of [`UserRepository`].
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct SeaUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeaUserRepository<'a> {
    /// Creates a new SeaUserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SeaUserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for SeaUserRepository<'_> {
    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Username, email and already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user without team
    /// - `Err(DbErr)` - Database error, including unique constraint violations on
    ///   username or email
    async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            team_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    async fn find_by(&self, filter: UserFilter) -> Result<Vec<User>, DbErr> {
        let condition = match filter {
            UserFilter::Id(id) => entity::user::Column::Id.eq(id),
            UserFilter::Email(email) => entity::user::Column::Email.eq(email),
            UserFilter::Username(username) => entity::user::Column::Username.eq(username),
        };

        let entities = entity::prelude::User::find()
            .filter(condition)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Updates a user's fields.
    ///
    /// Only fields set to `Some` are written; `updated_at` is always refreshed.
    ///
    /// # Arguments
    /// - `id` - User to update
    /// - `params` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    async fn update(&self, id: Uuid, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(username) = params.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = params.password_hash {
            active_model.password = ActiveValue::Set(password_hash);
        }
        if let Some(team_id) = params.team_id {
            active_model.team_id = ActiveValue::Set(Some(team_id));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn team_exists(&self, team_id: Uuid) -> Result<bool, DbErr> {
        let team = entity::prelude::Team::find_by_id(team_id).one(self.db).await?;

        Ok(team.is_some())
    }
}
