//! Forum tag management.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;

use crate::extractors::{ValidatedJson, SNOWFLAKE};
use crate::service::sync_forum_tags;
use crate::state::AppState;

/// Tags to ensure on a forum channel
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumTagsRequest {
    #[validate(regex(path = *SNOWFLAKE, message = "channelId must be a Discord id"))]
    #[schema(example = "1094727553384128634")]
    pub channel_id: String,
    /// Tag names
    #[validate(length(max = 20, message = "A forum channel holds at most 20 tags"))]
    #[schema(example = json!(["algebra", "geometry"]))]
    pub tags: Vec<String>,
}

/// Tag ids to apply to a forum post
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumTagsResponse {
    pub tag_ids: Vec<String>,
}

/// Create forum routes
pub fn forum_routes() -> Router<AppState> {
    Router::new().route("/", post(ensure_forum_tags))
}

/// Create missing forum tags and return the ids of the requested ones
#[utoipa::path(
    post,
    path = "/discord/forum",
    tag = "Discord",
    request_body = ForumTagsRequest,
    responses(
        (status = 200, description = "Tag ids, in channel order, at most five", body = ForumTagsResponse),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn ensure_forum_tags(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ForumTagsRequest>,
) -> AppResult<Json<ForumTagsResponse>> {
    let tag_ids = sync_forum_tags(state.discord.as_ref(), &request.channel_id, &request.tags).await?;
    Ok(Json(ForumTagsResponse { tag_ids }))
}
