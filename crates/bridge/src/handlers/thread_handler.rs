//! Problem thread refresh.

use axum::{extract::State, response::Json, routing::patch, Router};
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;

use crate::extractors::{ValidatedJson, SNOWFLAKE};
use crate::service::refresh_thread;
use crate::state::AppState;

/// Thread refresh request. Every field other than `message_id` is passed
/// to Discord as the message edit.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateThreadRequest {
    /// Forum thread (and starter message) id
    #[validate(regex(path = *SNOWFLAKE, message = "message_id must be a Discord id"))]
    #[schema(example = "1094727553384128634")]
    pub message_id: String,
    /// Message edit, e.g. `content` and `embeds`
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub edit: Map<String, Value>,
}

/// Create thread routes
pub fn thread_routes() -> Router<AppState> {
    Router::new().route("/", patch(update_thread))
}

/// Unarchive a problem thread and edit its starter message
#[utoipa::path(
    patch,
    path = "/discord/update-thread",
    tag = "Discord",
    request_body = UpdateThreadRequest,
    responses(
        (status = 200, description = "Edited message as returned by Discord"),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Unknown thread; Discord's error body is forwarded")
    )
)]
pub async fn update_thread(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateThreadRequest>,
) -> AppResult<Json<Value>> {
    let edit = Value::Object(request.edit);
    let message = refresh_thread(state.discord.as_ref(), &request.message_id, &edit).await?;
    Ok(Json(message))
}
