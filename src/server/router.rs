use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, TokenDto},
        bomb::{BombDto, CreateBombDto, UpdateBombDto},
        game::{CreateGameDto, GameDto, UpdateGameDto},
        inventory::{BombAmountDto, ChangeBombAmountDto, InventoryDto},
        team::{TeamDto, TeamPayloadDto},
        user::{LoginUserDto, RegisterUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{bomb, game, inventory, team, user},
        state::AppState,
    },
};

/// Builds the application router.
///
/// Mounts every resource under `/api/v1`, serves Swagger UI at `/docs` and the
/// OpenAPI document at `/api-doc/openapi.json`.
///
/// # Arguments
/// - `state` - Shared application state
///
/// # Returns
/// - `Router` - Router with state applied, ready to serve
pub fn router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/register", post(user::register))
        .route("/login", post(user::login))
        .route("/update", put(user::update_user))
        .route("/delete", delete(user::delete_user))
        .route("/user", get(user::get_user))
        .route("/users", get(user::get_users));

    let inventory_routes = Router::new()
        .route("/init", get(inventory::init_inventory))
        .route("/inventory", get(inventory::get_inventory))
        .route("/add", post(inventory::change_bombs_amount));

    let v1_routes = Router::new()
        .nest("/user", user_routes)
        .nest("/inventory", inventory_routes)
        .route("/games", get(game::get_games).post(game::create_game))
        .route(
            "/games/{id}",
            get(game::get_game)
                .put(game::update_game)
                .delete(game::delete_game),
        )
        .route("/teams", get(team::get_teams).post(team::create_team))
        .route(
            "/teams/{id}",
            get(team::get_team)
                .put(team::update_team)
                .delete(team::delete_team),
        )
        .route("/bombs", get(bomb::get_bombs).post(bomb::create_bomb))
        .route("/bombs/user/{user_id}", get(bomb::get_bombs_by_user))
        .route(
            "/bombs/{id}",
            get(bomb::get_bomb)
                .put(bomb::update_bomb)
                .delete(bomb::delete_bomb),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        user::register,
        user::login,
        user::update_user,
        user::delete_user,
        user::get_user,
        user::get_users,
        inventory::init_inventory,
        inventory::get_inventory,
        inventory::change_bombs_amount,
        game::create_game,
        game::get_games,
        game::get_game,
        game::update_game,
        game::delete_game,
        team::create_team,
        team::get_teams,
        team::get_team,
        team::update_team,
        team::delete_team,
        bomb::create_bomb,
        bomb::get_bombs,
        bomb::get_bombs_by_user,
        bomb::get_bomb,
        bomb::update_bomb,
        bomb::delete_bomb
    ),
    components(
        schemas(
            ErrorDto,
            TokenDto,
            UserDto,
            RegisterUserDto,
            LoginUserDto,
            UpdateUserDto,
            InventoryDto,
            BombAmountDto,
            ChangeBombAmountDto,
            GameDto,
            CreateGameDto,
            UpdateGameDto,
            TeamDto,
            TeamPayloadDto,
            BombDto,
            CreateBombDto,
            UpdateBombDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "user", description = "Registration, login and account management"),
        (name = "inventory", description = "Bomb stock of the calling user"),
        (name = "game", description = "Game areas and time windows"),
        (name = "team", description = "Teams competing in a game"),
        (name = "bomb", description = "Bombs placed on the map")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
