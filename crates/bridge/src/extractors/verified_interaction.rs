//! Extractor for signed Discord interactions.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::HeaderMap,
};
use tracing::warn;

use common::AppError;
use domain::{Interaction, SIGNATURE_HEADER, SIGNATURE_TIMESTAMP_HEADER};

use crate::state::AppState;

/// An interaction whose Ed25519 signature has been checked.
///
/// The signature covers the raw bytes, so verification happens before the
/// body is parsed. Missing headers count as a failed verification.
#[derive(Debug)]
pub struct VerifiedInteraction(pub Interaction);

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[async_trait]
impl FromRequest<AppState> for VerifiedInteraction {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let signature = header(req.headers(), SIGNATURE_HEADER);
        let timestamp = header(req.headers(), SIGNATURE_TIMESTAMP_HEADER);

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
            warn!("Interaction request without signature headers");
            return Err(AppError::InvalidSignature);
        };

        if !state.verifier.verify(&signature, &timestamp, &body) {
            warn!("Interaction request with invalid signature");
            return Err(AppError::InvalidSignature);
        }

        let interaction: Interaction = serde_json::from_slice(&body)?;
        Ok(Self(interaction))
    }
}
