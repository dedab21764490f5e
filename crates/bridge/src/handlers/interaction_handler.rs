//! Discord interactions webhook.

use std::convert::Infallible;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use futures::stream;
use tokio::sync::oneshot;
use tracing::info;

use common::AppResult;
use domain::InteractionResponse;

use crate::extractors::VerifiedInteraction;
use crate::service::{complete_feedback, dispatch, Reply};
use crate::state::AppState;

/// Create interaction routes
pub fn interaction_routes() -> Router<AppState> {
    Router::new().route("/", get(probe).post(handle_interaction))
}

/// Liveness probe for the interactions URL
#[utoipa::path(
    get,
    path = "/discord/interactions",
    tag = "Discord",
    responses(
        (status = 200, description = "Endpoint is reachable", body = String, content_type = "text/plain")
    )
)]
pub async fn probe() -> impl IntoResponse {
    (StatusCode::OK, [(CONTENT_TYPE, "text/plain")], "Here!")
}

/// Receive an interaction from Discord
#[utoipa::path(
    post,
    path = "/discord/interactions",
    tag = "Discord",
    params(
        ("x-signature-ed25519" = String, Header, description = "Hex Ed25519 signature"),
        ("x-signature-timestamp" = String, Header, description = "Signed timestamp")
    ),
    responses(
        (status = 200, description = "Interaction response"),
        (status = 400, description = "Malformed interaction"),
        (status = 401, description = "Invalid request signature")
    )
)]
pub async fn handle_interaction(
    State(state): State<AppState>,
    VerifiedInteraction(interaction): VerifiedInteraction,
) -> AppResult<Response> {
    match dispatch(&interaction)? {
        Reply::Immediate(response) => Ok(Json(response).into_response()),
        Reply::DeferredFeedback => {
            info!("Deferring feedback for interaction {}", interaction.id);
            let (sent_tx, sent_rx) = oneshot::channel::<()>();
            tokio::spawn(async move {
                // Discord answers 404 on @original until it has the deferral.
                let _ = sent_rx.await;
                complete_feedback(state.discord.as_ref(), state.store.as_ref(), &interaction)
                    .await;
            });
            signalling_response(&InteractionResponse::deferred_ephemeral(), sent_tx)
        }
    }
}

/// JSON response whose body drops `sent` once it has been fully streamed.
fn signalling_response(
    response: &InteractionResponse,
    sent: oneshot::Sender<()>,
) -> AppResult<Response> {
    let bytes = Bytes::from(serde_json::to_vec(response)?);
    let body = stream::unfold((Some(bytes), Some(sent)), |(bytes, sent)| async move {
        let chunk = bytes?;
        Some((Ok::<_, Infallible>(chunk), (None, sent)))
    });

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, "application/json")],
        Body::from_stream(body),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_signal_fires_after_body_is_read() {
        let (sent_tx, mut sent_rx) = oneshot::channel::<()>();
        let response =
            signalling_response(&InteractionResponse::deferred_ephemeral(), sent_tx).unwrap();

        assert!(matches!(
            sent_rx.try_recv(),
            Err(oneshot::error::TryRecvError::Empty)
        ));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let reply: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(reply["type"], 5);

        assert!(matches!(
            sent_rx.try_recv(),
            Err(oneshot::error::TryRecvError::Closed)
        ));
    }
}
