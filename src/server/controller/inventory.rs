use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        inventory::{ChangeBombAmountDto, InventoryDto},
    },
    server::{
        data::inventory::SeaInventoryRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::inventory::inventory_into_dto,
        service::inventory::InventoryService,
        state::AppState,
    },
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static INVENTORY_TAG: &str = "inventory";

/// Initialise the caller's inventory.
///
/// Creates or resets one entry per canonical bomb type with an amount of 0.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `200 OK` - The caller's inventory after initialisation
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/inventory/init",
    tag = INVENTORY_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Inventory initialised", body = InventoryDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn init_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = InventoryService::new(SeaInventoryRepository::new(&state.db));

    let entries = service.init_user_inventory(caller.id).await?;

    Ok((StatusCode::OK, Json(inventory_into_dto(caller.id, entries))))
}

/// Get the caller's inventory.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `200 OK` - The caller's inventory
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/inventory/inventory",
    tag = INVENTORY_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's inventory", body = InventoryDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = InventoryService::new(SeaInventoryRepository::new(&state.db));

    let entries = service.find_by_user(caller.id).await?;

    Ok((StatusCode::OK, Json(inventory_into_dto(caller.id, entries))))
}

/// Change the caller's amount of one bomb type.
///
/// A negative amount consumes bombs; the stored amount never drops below 0.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `200 OK` - The caller's inventory after the change
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - The caller holds no entry of that type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/inventory/add",
    tag = INVENTORY_TAG,
    request_body = ChangeBombAmountDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Amount changed", body = InventoryDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Bomb type not in inventory", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_bombs_amount(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangeBombAmountDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers, &state.jwt_secret)
        .require()
        .await?;

    let service = InventoryService::new(SeaInventoryRepository::new(&state.db));

    service
        .change_bombs_amount(caller.id, &payload.type_bomb, payload.amount)
        .await?;
    let entries = service.find_by_user(caller.id).await?;

    Ok((StatusCode::OK, Json(inventory_into_dto(caller.id, entries))))
}
