//! Ed25519 verification of Discord interaction requests.
//!
//! Discord signs `timestamp || body` with the application's private key and
//! sends the hex-encoded signature in `X-Signature-Ed25519`. Requests that
//! fail verification must be rejected with 401, otherwise Discord refuses to
//! save the interactions endpoint URL.

use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH};

use common::ConfigError;

/// Verifies interaction signatures against the application public key.
#[derive(Clone, Debug)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Parse the hex-encoded public key shown in the developer portal.
    pub fn from_hex(public_key_hex: &str) -> Result<Self, ConfigError> {
        let bytes = hex::decode(public_key_hex.trim())
            .map_err(|e| ConfigError::invalid("DISCORD_PUBLIC_KEY", e.to_string()))?;

        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            ConfigError::invalid(
                "DISCORD_PUBLIC_KEY",
                format!("expected {} bytes", PUBLIC_KEY_LENGTH),
            )
        })?;

        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| ConfigError::invalid("DISCORD_PUBLIC_KEY", e.to_string()))?;

        Ok(Self { key })
    }

    /// Check `signature_hex` over `timestamp` followed by the raw body.
    pub fn verify(&self, signature_hex: &str, timestamp: &str, body: &[u8]) -> bool {
        let Ok(signature_bytes) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&signature_bytes) else {
            return false;
        };

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key.verify(&message, &signature).is_ok()
    }
}
