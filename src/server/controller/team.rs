use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        team::{TeamDto, TeamPayloadDto},
    },
    server::{
        data::team::SeaTeamRepository, error::AppError, middleware::auth::AuthGuard,
        model::team::Team, service::team::TeamService, state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a team in an existing game.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `201 Created` - Team created
/// - `400 Bad Request` - Negative score, empty name or color, missing game id
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Referenced game doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    request_body = TeamPayloadDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TeamPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = TeamService::new(SeaTeamRepository::new(&state.db));

    let team = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// List all teams.
///
/// # Access Control
/// - Bearer token
#[utoipa::path(
    get,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All teams", body = Vec<TeamDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = TeamService::new(SeaTeamRepository::new(&state.db));

    let teams: Vec<TeamDto> = service
        .find_all()
        .await?
        .into_iter()
        .map(Team::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Get a team by id.
///
/// # Access Control
/// - Bearer token
#[utoipa::path(
    get,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team found", body = TeamDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = TeamService::new(SeaTeamRepository::new(&state.db));

    let team = service.find_by_id(id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Overwrite every field of a team.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `200 OK` - Team updated
/// - `400 Bad Request` - Invalid team data
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Team or referenced game doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    request_body = TeamPayloadDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Team or game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<TeamPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = TeamService::new(SeaTeamRepository::new(&state.db));

    let team = service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team. Its members stay registered without a team.
///
/// # Access Control
/// - Bearer token
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = TeamService::new(SeaTeamRepository::new(&state.db));

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
