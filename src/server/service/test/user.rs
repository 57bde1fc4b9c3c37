use super::*;
use sea_orm::EntityTrait;
use crate::{
    model::user::{LoginUserDto, RegisterUserDto, UpdateUserDto},
    server::{
        data::user::{SeaUserRepository, UserRepository},
        error::auth::AuthError,
        model::user::{CreateUserParams, UpdateUserParams, User, UserFilter},
        service::{auth::token, user::UserService},
    },
};

const SECRET: &str = "service-secret";

fn register_dto(username: &str, email: &str) -> RegisterUserDto {
    RegisterUserDto {
        username: username.to_string(),
        email: email.to_string(),
        password: "hunter2".to_string(),
    }
}

/// Tests that registration issues a token for the new identity.
///
/// Expected: Ok with token decoding to the registered username and email
#[tokio::test]
async fn register_issues_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(SeaUserRepository::new(db), SECRET);
    let issued = service
        .register(register_dto("alice", "alice@example.com"))
        .await
        .unwrap();

    let claims = token::parse_token(SECRET, &issued).unwrap();
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.email, "alice@example.com");

    let stored = entity::prelude::User::find()
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password, "hunter2");

    Ok(())
}

/// Tests that duplicate email or username is rejected.
///
/// Expected: Err(Conflict) for both cases
#[tokio::test]
async fn register_rejects_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(SeaUserRepository::new(db), SECRET);
    service
        .register(register_dto("alice", "alice@example.com"))
        .await
        .unwrap();

    let same_email = service
        .register(register_dto("bob", "alice@example.com"))
        .await;
    assert!(matches!(same_email, Err(AppError::Conflict(_))));

    let same_username = service
        .register(register_dto("alice", "bob@example.com"))
        .await;
    assert!(matches!(same_username, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that empty fields are all reported.
///
/// Expected: Err(BadRequest) listing email and password
#[tokio::test]
async fn register_requires_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(SeaUserRepository::new(db), SECRET);
    let result = service
        .register(RegisterUserDto {
            username: "alice".to_string(),
            email: String::new(),
            password: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Missing required fields: email, password"
    ));

    Ok(())
}

/// Tests login with correct and incorrect credentials.
///
/// Expected: token for the right password, InvalidCredentials otherwise,
/// NotFound for an unknown email
#[tokio::test]
async fn login_checks_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(SeaUserRepository::new(db), SECRET);
    service
        .register(register_dto("alice", "alice@example.com"))
        .await
        .unwrap();

    let issued = service
        .login(LoginUserDto {
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    let claims = token::parse_token(SECRET, &issued).unwrap();
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.email, "alice@example.com");

    let wrong = service
        .login(LoginUserDto {
            email: "alice@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown = service
        .login(LoginUserDto {
            email: "nobody@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests find_one for present and absent users.
///
/// Expected: Ok for a match, NotFound otherwise
#[tokio::test]
async fn find_one_returns_single_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(SeaUserRepository::new(db), SECRET);

    let found = service
        .find_one(UserFilter::Username(user.username.clone()))
        .await
        .unwrap();
    assert_eq!(found.id, user.id);

    let missing = service.find_one(UserFilter::Id(Uuid::new_v4())).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that update keeps empty fields, re-hashes the password and joins a team.
///
/// Expected: Ok with token for the new username; login works with the new password
#[tokio::test]
async fn update_overwrites_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let team = factory::create_team(db, game.id).await?;

    let service = UserService::new(SeaUserRepository::new(db), SECRET);
    service
        .register(register_dto("alice", "alice@example.com"))
        .await
        .unwrap();

    let issued = service
        .update(
            "alice@example.com",
            UpdateUserDto {
                user_name: "alicia".to_string(),
                password: "correct horse".to_string(),
                id_team: Some(team.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let claims = token::parse_token(SECRET, &issued).unwrap();
    assert_eq!(claims.username, "alicia");
    assert_eq!(claims.email, "alice@example.com");

    let user = service
        .find_one(UserFilter::Email("alice@example.com".to_string()))
        .await
        .unwrap();
    assert_eq!(user.team_id, Some(team.id));

    assert!(service
        .login(LoginUserDto {
            email: "alice@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .is_ok());

    Ok(())
}

/// Tests that update rejects an unknown team and a taken email.
///
/// Expected: NotFound for the team, Conflict for the email
#[tokio::test]
async fn update_rejects_unknown_team_and_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(SeaUserRepository::new(db), SECRET);
    service
        .register(register_dto("alice", "alice@example.com"))
        .await
        .unwrap();
    service
        .register(register_dto("bob", "bob@example.com"))
        .await
        .unwrap();

    let unknown_team = service
        .update(
            "alice@example.com",
            UpdateUserDto {
                id_team: Some(Uuid::new_v4()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(unknown_team, Err(AppError::NotFound(_))));

    let taken = service
        .update(
            "alice@example.com",
            UpdateUserDto {
                email: "bob@example.com".to_string(),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting present and absent users.
///
/// Expected: Ok then NotFound
#[tokio::test]
async fn delete_reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(SeaUserRepository::new(db), SECRET);

    assert!(service.delete(user.id).await.is_ok());
    assert!(matches!(
        service.delete(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// User repository answering every lookup with a fixed set of users.
struct FixedUserRepository {
    users: Vec<User>,
}

impl FixedUserRepository {
    fn with_usernames(usernames: &[&str]) -> Self {
        let users = usernames
            .iter()
            .map(|username| User {
                id: Uuid::new_v4(),
                username: username.to_string(),
                email: format!("{}@example.com", username),
                password_hash: String::new(),
                team_id: None,
            })
            .collect();

        Self { users }
    }
}

impl UserRepository for FixedUserRepository {
    async fn create(&self, _params: CreateUserParams) -> Result<User, DbErr> {
        Err(DbErr::Custom("read-only repository".to_string()))
    }

    async fn find_by(&self, _filter: UserFilter) -> Result<Vec<User>, DbErr> {
        Ok(self.users.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        Ok(self.users.clone())
    }

    async fn update(&self, _id: Uuid, _params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        Ok(None)
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, DbErr> {
        Ok(false)
    }

    async fn team_exists(&self, _team_id: Uuid) -> Result<bool, DbErr> {
        Ok(false)
    }
}

/// Tests that a filter matching several users is rejected.
///
/// Expected: Err(AmbiguousResult) naming the match count and the filter
#[tokio::test]
async fn find_one_rejects_multiple_matches() {
    let service = UserService::new(FixedUserRepository::with_usernames(&["alice", "bob"]), SECRET);

    let result = service
        .find_one(UserFilter::Username("alice".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AmbiguousResult(msg)) if msg == "2 users found with username alice"
    ));
}

/// Tests that a filter matching nobody is reported as missing.
///
/// Expected: Err(NotFound) naming the filter
#[tokio::test]
async fn find_one_reports_no_match() {
    let service = UserService::new(FixedUserRepository::with_usernames(&[]), SECRET);

    let result = service
        .find_one(UserFilter::Email("ghost@example.com".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(msg)) if msg == "No user found with email ghost@example.com"
    ));
}
