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
        bomb::{BombDto, CreateBombDto, UpdateBombDto},
    },
    server::{
        data::bomb::SeaBombRepository, error::AppError, model::bomb::Bomb,
        service::bomb::BombService, state::AppState,
    },
};

/// Tag for grouping bomb endpoints in OpenAPI documentation
pub static BOMB_TAG: &str = "bomb";

/// Place a bomb.
///
/// # Returns
/// - `201 Created` - Bomb created
/// - `400 Bad Request` - Invalid coordinates or empty type
/// - `404 Not Found` - Referenced owner doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/bombs",
    tag = BOMB_TAG,
    request_body = CreateBombDto,
    responses(
        (status = 201, description = "Bomb created", body = BombDto),
        (status = 400, description = "Invalid bomb data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bomb(
    State(state): State<AppState>,
    Json(payload): Json<CreateBombDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BombService::new(SeaBombRepository::new(&state.db));

    let bomb = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(bomb.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/bombs",
    tag = BOMB_TAG,
    responses(
        (status = 200, description = "All bombs", body = Vec<BombDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bombs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BombService::new(SeaBombRepository::new(&state.db));

    let bombs: Vec<BombDto> = service
        .find_all()
        .await?
        .into_iter()
        .map(Bomb::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(bombs)))
}

/// List the bombs owned by a user.
#[utoipa::path(
    get,
    path = "/api/v1/bombs/user/{user_id}",
    tag = BOMB_TAG,
    params(
        ("user_id" = Uuid, Path, description = "Owner id")
    ),
    responses(
        (status = 200, description = "Bombs of the user", body = Vec<BombDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bombs_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = BombService::new(SeaBombRepository::new(&state.db));

    let bombs: Vec<BombDto> = service
        .find_all_by_user_id(user_id)
        .await?
        .into_iter()
        .map(Bomb::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(bombs)))
}

#[utoipa::path(
    get,
    path = "/api/v1/bombs/{id}",
    tag = BOMB_TAG,
    params(
        ("id" = Uuid, Path, description = "Bomb id")
    ),
    responses(
        (status = 200, description = "Bomb found", body = BombDto),
        (status = 404, description = "Bomb not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bomb(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = BombService::new(SeaBombRepository::new(&state.db));

    let bomb = service.find_by_id(id).await?;

    Ok((StatusCode::OK, Json(bomb.into_dto())))
}

/// Update the supplied fields of a bomb.
///
/// # Returns
/// - `200 OK` - Bomb updated
/// - `400 Bad Request` - Empty payload or invalid values
/// - `404 Not Found` - No bomb with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/bombs/{id}",
    tag = BOMB_TAG,
    params(
        ("id" = Uuid, Path, description = "Bomb id")
    ),
    request_body = UpdateBombDto,
    responses(
        (status = 200, description = "Bomb updated", body = BombDto),
        (status = 400, description = "Invalid bomb data", body = ErrorDto),
        (status = 404, description = "Bomb not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bomb(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBombDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BombService::new(SeaBombRepository::new(&state.db));

    let bomb = service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(bomb.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/bombs/{id}",
    tag = BOMB_TAG,
    params(
        ("id" = Uuid, Path, description = "Bomb id")
    ),
    responses(
        (status = 204, description = "Bomb deleted"),
        (status = 404, description = "Bomb not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bomb(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = BombService::new(SeaBombRepository::new(&state.db));

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
