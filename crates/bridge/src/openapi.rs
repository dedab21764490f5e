//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::forum_handler::{ForumTagsRequest, ForumTagsResponse};
use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use crate::handlers::thread_handler::UpdateThreadRequest;
use domain::ProblemUpdate;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::interaction_handler::probe,
        crate::handlers::interaction_handler::handle_interaction,
        crate::handlers::relay_handler::relay_update,
        crate::handlers::thread_handler::update_thread,
        crate::handlers::forum_handler::ensure_forum_tags,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
            ProblemUpdate,
            UpdateThreadRequest,
            ForumTagsRequest,
            ForumTagsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Discord", description = "Discord interactions and relays"),
    )
)]
pub struct ApiDoc;
