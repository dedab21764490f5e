//! Problem update announcements relayed to the Discord webhook.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Event posted by the web application when someone changes a problem.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProblemUpdate {
    /// Display name of whoever made the change
    #[validate(length(min = 1, message = "updater is required"))]
    pub updater: String,
    /// Verb phrase describing the change, e.g. "edited"
    #[validate(length(min = 1, message = "update is required"))]
    pub update: String,
    /// Problem id (number or string)
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub id: Value,
}

impl ProblemUpdate {
    /// Message content, e.g. `"alice edited problem 12"`.
    pub fn announcement(&self) -> String {
        let id = match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        format!("{} {} problem {}", self.updater, self.update, id)
    }
}

/// Body of an execute-webhook call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_announcement_with_numeric_id() {
        let update: ProblemUpdate =
            serde_json::from_value(json!({ "updater": "alice", "update": "edited", "id": 12 }))
                .unwrap();
        assert_eq!(update.announcement(), "alice edited problem 12");
    }

    #[test]
    fn test_blank_updater_is_invalid() {
        let update: ProblemUpdate =
            serde_json::from_value(json!({ "updater": "", "update": "edited", "id": 12 }))
                .unwrap();
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_announcement_with_string_id() {
        let update: ProblemUpdate =
            serde_json::from_value(json!({ "updater": "bob", "update": "created", "id": "A-3" }))
                .unwrap();
        assert_eq!(update.announcement(), "bob created problem A-3");
    }
}
