//! Problem update relay.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};

use common::{AppError, AppResult};
use domain::ProblemUpdate;

use crate::extractors::ValidatedJson;
use crate::service::{announce_update, announcement};
use crate::state::AppState;

/// Create relay routes
pub fn relay_routes() -> Router<AppState> {
    Router::new().route("/", post(relay_update))
}

/// Announce a problem update on the Discord webhook
#[utoipa::path(
    post,
    path = "/discord-update",
    tag = "Discord",
    request_body = ProblemUpdate,
    responses(
        (status = 200, description = "Announcement posted", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid update or webhook call failed")
    )
)]
pub async fn relay_update(
    State(state): State<AppState>,
    ValidatedJson(update): ValidatedJson<ProblemUpdate>,
) -> AppResult<impl IntoResponse> {
    let settings = state.settings.get(state.store.as_ref()).await;
    let message = announcement(
        &update,
        &settings,
        state.config.public_base_url.as_deref(),
    );

    announce_update(
        state.discord.as_ref(),
        state.config.webhook.as_ref(),
        &message,
    )
    .await
    .map_err(|e| AppError::bad_request(format!("Error in updating discord webhook: {}", e)))?;

    Ok((StatusCode::OK, [(CONTENT_TYPE, "text/plain")], "Works!"))
}
