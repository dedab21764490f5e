//! Request extractors.

mod validated_json;
mod verified_interaction;

pub use validated_json::{ValidatedJson, SNOWFLAKE};
pub use verified_interaction::VerifiedInteraction;
