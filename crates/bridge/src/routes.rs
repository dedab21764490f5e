//! Route configuration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    forum_routes, health_routes, interaction_routes, relay_routes, thread_routes,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Signed webhook called by Discord
        .nest("/discord/interactions", interaction_routes())
        // Called by the web application
        .nest("/discord/update-thread", thread_routes())
        .nest("/discord/forum", forum_routes())
        .nest("/discord-update", relay_routes())
        .with_state(state)
}
