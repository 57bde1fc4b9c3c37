use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, TokenDto},
        user::{LoginUserDto, RegisterUserDto, UpdateUserDto, UserDto, UserIdQuery},
    },
    server::{
        data::user::SeaUserRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{User, UserFilter},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// Creates the account with a hashed password and returns a bearer token for it.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Account created, token returned
/// - `400 Bad Request` - Missing username, email or password
/// - `409 Conflict` - Username or email already in use
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/user/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = TokenDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 409, description = "Username or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(SeaUserRepository::new(&state.db), &state.jwt_secret);

    let token = service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(TokenDto { token })))
}

/// Log in with email and password.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Credentials valid, token returned
/// - `400 Bad Request` - Missing email or password
/// - `401 Unauthorized` - Wrong password
/// - `404 Not Found` - No user with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/user/login",
    tag = USER_TAG,
    request_body = LoginUserDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(SeaUserRepository::new(&state.db), &state.jwt_secret);

    let token = service.login(payload).await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Update the calling user.
///
/// Empty fields keep their stored value. Returns a token for the possibly changed
/// identity; previously issued tokens naming the old email stop resolving.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `200 OK` - Account updated, new token returned
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Referenced team doesn't exist
/// - `409 Conflict` - New username or email already in use
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    put,
    path = "/api/v1/user/update",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User updated", body = TokenDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Username or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = UserService::new(SeaUserRepository::new(&state.db), &state.jwt_secret);

    let token = service.update(&caller.email, payload).await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Delete a user by id.
///
/// Removes the user together with their bombs and inventory.
/// Any authenticated caller may delete any account; there is no ownership check.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/user/delete",
    tag = USER_TAG,
    params(UserIdQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = UserService::new(SeaUserRepository::new(&state.db), &state.jwt_secret);

    service.delete(query.id_user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a user by id.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/user/user",
    tag = USER_TAG,
    params(UserIdQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = UserService::new(SeaUserRepository::new(&state.db), &state.jwt_secret);

    let user = service.find_one(UserFilter::Id(query.id_user)).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List all users.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `200 OK` - Every registered user
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/user/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = UserService::new(SeaUserRepository::new(&state.db), &state.jwt_secret);

    let users: Vec<UserDto> = service
        .find_all()
        .await?
        .into_iter()
        .map(User::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(users)))
}
