use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{get_session, sign_in, sign_out, sign_up},
        nav::{create_nav_menu, delete_nav_menu, get_nav_menu, update_nav_menu},
        page::{create_page, delete_page, get_page, get_pages, update_page},
        user::{delete_user, get_user, get_users, update_user},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pressroom API",
        description = "Users, pages and navigation menus behind session authentication"
    ),
    tags(
        (name = "auth", description = "Registration and sessions"),
        (name = "user", description = "User management"),
        (name = "page", description = "Content pages"),
        (name = "nav", description = "Navigation menus")
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI served at `/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(sign_up))
        .routes(routes!(sign_in))
        .routes(routes!(sign_out))
        .routes(routes!(get_session))
        .routes(routes!(get_users))
        .routes(routes!(get_user, update_user, delete_user))
        .routes(routes!(create_page))
        .routes(routes!(get_pages))
        .routes(routes!(get_page, update_page, delete_page))
        .routes(routes!(create_nav_menu))
        .routes(routes!(get_nav_menu, update_nav_menu, delete_nav_menu))
        .split_for_parts();

    router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
}
