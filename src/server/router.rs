//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every resource endpoint is registered here with its OpenAPI description, and Swagger UI
//! is served at `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all resource endpoints and Swagger UI.
///
/// # Registered Endpoints
/// For each of `/factions`, `/fighter-categories`, `/fighter-types`, `/skill-types`,
/// `/skills`, `/traits`, `/weapon-types` and `/weapons`:
/// - `GET /<resource>` - List rows in creation order, with optional `skip` and `take`
/// - `POST /<resource>` - Create a row, 201 on success, 409 on duplicate name
/// - `DELETE /<resource>/{id}` - Delete a row and return it
///
/// The OpenAPI document is available at `/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Roster", description = "Roster reference data API"), tags(
        (name = controller::faction::FACTION_TAG, description = "Faction API routes"),
        (name = controller::fighter_category::FIGHTER_CATEGORY_TAG, description = "Fighter category API routes"),
        (name = controller::fighter_type::FIGHTER_TYPE_TAG, description = "Fighter type API routes"),
        (name = controller::skill_type::SKILL_TYPE_TAG, description = "Skill type API routes"),
        (name = controller::skill::SKILL_TAG, description = "Skill API routes"),
        (name = controller::game_trait::TRAIT_TAG, description = "Trait API routes"),
        (name = controller::weapon_type::WEAPON_TYPE_TAG, description = "Weapon type API routes"),
        (name = controller::weapon::WEAPON_TAG, description = "Weapon API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::faction::get_factions,
            controller::faction::create_faction
        ))
        .routes(routes!(controller::faction::delete_faction))
        .routes(routes!(
            controller::fighter_category::get_fighter_categories,
            controller::fighter_category::create_fighter_category
        ))
        .routes(routes!(controller::fighter_category::delete_fighter_category))
        .routes(routes!(
            controller::fighter_type::get_fighter_types,
            controller::fighter_type::create_fighter_type
        ))
        .routes(routes!(controller::fighter_type::delete_fighter_type))
        .routes(routes!(
            controller::skill_type::get_skill_types,
            controller::skill_type::create_skill_type
        ))
        .routes(routes!(controller::skill_type::delete_skill_type))
        .routes(routes!(
            controller::skill::get_skills,
            controller::skill::create_skill
        ))
        .routes(routes!(controller::skill::delete_skill))
        .routes(routes!(
            controller::game_trait::get_traits,
            controller::game_trait::create_trait
        ))
        .routes(routes!(controller::game_trait::delete_trait))
        .routes(routes!(
            controller::weapon_type::get_weapon_types,
            controller::weapon_type::create_weapon_type
        ))
        .routes(routes!(controller::weapon_type::delete_weapon_type))
        .routes(routes!(
            controller::weapon::get_weapons,
            controller::weapon::create_weapon
        ))
        .routes(routes!(controller::weapon::delete_weapon))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
