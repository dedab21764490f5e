//! Domain-level constants.
//!
//! Values fixed by Discord's API contract and by the canned replies the
//! bridge sends back to users.

// =============================================================================
// Discord API
// =============================================================================

/// Discord REST API base URL (v10)
pub const DISCORD_API_BASE_URL: &str = "https://discord.com/api/v10";

/// Header carrying the hex-encoded Ed25519 signature of an interaction
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";

/// Header carrying the timestamp that prefixes the signed message
pub const SIGNATURE_TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Authorization header prefix for bot tokens
pub const BOT_TOKEN_PREFIX: &str = "Bot ";

/// Message flag: only the invoking user can see the message
pub const FLAG_EPHEMERAL: u64 = 1 << 6;

/// Discord allows at most this many tags on a forum post
pub const MAX_FORUM_TAGS: usize = 5;

// =============================================================================
// Component identifiers
// =============================================================================

/// Button attached to the `/ping` reply
pub const PING_BUTTON_ID: &str = "ping_button";

/// Modal opened by `/problem`
pub const PROBLEM_MODAL_ID: &str = "problem_modal";

/// Title text input inside the problem modal
pub const PROBLEM_TITLE_INPUT_ID: &str = "problem_title";

// =============================================================================
// Relay
// =============================================================================

/// Username shown on webhook relays
pub const WEBHOOK_USERNAME: &str = "Problem Writing Platform";

/// Logo used when the settings row carries none
pub const DEFAULT_LOGO: &str = "/logo.png";

// =============================================================================
// Replies
// =============================================================================

pub const REPLY_PONG: &str = "Pong!";
pub const REPLY_BUTTON_CLICKED: &str = "Button clicked!";
pub const REPLY_UNKNOWN_COMPONENT: &str = "Unknown component";
pub const REPLY_UNKNOWN_MODAL: &str = "Unknown modal";

pub const REPLY_NO_PROBLEM: &str =
    "No problem detected - make sure to use the command in the problem specific thread!";
pub const REPLY_NO_ACCOUNT: &str = "The author does not have permissions. Make sure they have a COMPOSE account, and have connected their discord!";
pub const REPLY_FEEDBACK_REQUIRED: &str = "Feedback text is required.";
pub const REPLY_FEEDBACK_FAILED: &str = "Failed to submit feedback. Please try again later.";
pub const REPLY_FEEDBACK_SUBMITTED: &str = "Feedback submitted successfully!";
