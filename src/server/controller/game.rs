use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateGameDto, GameDto, UpdateGameDto},
    },
    server::{
        data::game::SeaGameRepository, error::AppError, model::game::Game,
        service::game::GameService, state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Create a new game.
///
/// All five fields are required. The centre must be a valid coordinate, the size
/// between 50 and 10107, and the ending date between one day and one month from now.
///
/// # Returns
/// - `201 Created` - Game created with an empty team list
/// - `400 Bad Request` - Missing fields or values out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Game created", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(SeaGameRepository::new(&state.db));

    let game = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// List all games with their teams.
///
/// # Returns
/// - `200 OK` - Every game
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "All games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(SeaGameRepository::new(&state.db));

    let games: Vec<GameDto> = service
        .find_all()
        .await?
        .into_iter()
        .map(Game::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(games)))
}

/// Get a game by id with its teams.
///
/// # Returns
/// - `200 OK` - The game
/// - `404 Not Found` - No game with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "Game found", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(SeaGameRepository::new(&state.db));

    let game = service.find_by_id(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Update the supplied fields of a game.
///
/// # Returns
/// - `200 OK` - The updated game
/// - `400 Bad Request` - Empty payload or values out of range
/// - `404 Not Found` - No game with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game id")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Game updated", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(SeaGameRepository::new(&state.db));

    let game = service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a game and its teams.
///
/// # Returns
/// - `204 No Content` - Game deleted
/// - `404 Not Found` - No game with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game id")
    ),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(SeaGameRepository::new(&state.db));

    service.delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
