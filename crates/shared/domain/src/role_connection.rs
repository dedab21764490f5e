//! Role-connection metadata records.

use serde::{Deserialize, Serialize};

/// Metadata comparison types understood by Discord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataType {
    IntegerLessThanOrEqual = 1,
    IntegerGreaterThanOrEqual = 2,
    IntegerEqual = 3,
    IntegerNotEqual = 4,
    DatetimeLessThanOrEqual = 5,
    DatetimeGreaterThanOrEqual = 6,
    BooleanEqual = 7,
    BooleanNotEqual = 8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConnectionMetadata {
    pub key: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
}

impl RoleConnectionMetadata {
    pub fn new(key: &str, name: &str, description: &str, kind: MetadataType) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            kind: kind as u8,
        }
    }
}

/// Attributes linked roles can require of a member's COMPOSE account.
pub fn role_connection_metadata() -> Vec<RoleConnectionMetadata> {
    vec![
        RoleConnectionMetadata::new(
            "verified",
            "Verified",
            "Is Verified on COMPOSE",
            MetadataType::BooleanEqual,
        ),
        RoleConnectionMetadata::new(
            "problemswritten",
            "Problems Written",
            "Number of Problems Written",
            MetadataType::IntegerGreaterThanOrEqual,
        ),
        RoleConnectionMetadata::new(
            "unresolvedfeedback",
            "Unresolved Feedback",
            "Total Unresolved Feedback",
            MetadataType::IntegerGreaterThanOrEqual,
        ),
    ]
}
