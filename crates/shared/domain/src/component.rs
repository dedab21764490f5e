//! Message components (action rows, buttons, text inputs).
//!
//! The same shape is used both for components the bridge sends and for
//! the rows Discord returns on modal submission.

use serde::{Deserialize, Serialize};

/// Primary (blurple) button style
pub const BUTTON_STYLE_PRIMARY: u8 = 1;

/// Single-line text input style
pub const TEXT_INPUT_STYLE_SHORT: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ComponentType {
    ActionRow,
    Button,
    StringSelect,
    TextInput,
    Other(u8),
}

impl From<u8> for ComponentType {
    fn from(value: u8) -> Self {
        match value {
            1 => ComponentType::ActionRow,
            2 => ComponentType::Button,
            3 => ComponentType::StringSelect,
            4 => ComponentType::TextInput,
            other => ComponentType::Other(other),
        }
    }
}

impl From<ComponentType> for u8 {
    fn from(kind: ComponentType) -> Self {
        match kind {
            ComponentType::ActionRow => 1,
            ComponentType::Button => 2,
            ComponentType::StringSelect => 3,
            ComponentType::TextInput => 4,
            ComponentType::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

impl Component {
    fn empty(kind: ComponentType) -> Self {
        Self {
            kind,
            custom_id: None,
            label: None,
            style: None,
            value: None,
            required: None,
            components: Vec::new(),
        }
    }

    /// Row container; buttons and text inputs must live inside one.
    pub fn action_row(components: Vec<Component>) -> Self {
        Self {
            components,
            ..Self::empty(ComponentType::ActionRow)
        }
    }

    pub fn button(custom_id: impl Into<String>, label: impl Into<String>, style: u8) -> Self {
        Self {
            custom_id: Some(custom_id.into()),
            label: Some(label.into()),
            style: Some(style),
            ..Self::empty(ComponentType::Button)
        }
    }

    /// Required single-line text input, optionally prefilled.
    pub fn short_text_input(
        custom_id: impl Into<String>,
        label: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            custom_id: Some(custom_id.into()),
            label: Some(label.into()),
            style: Some(TEXT_INPUT_STYLE_SHORT),
            value,
            required: Some(true),
            ..Self::empty(ComponentType::TextInput)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_button_row_serializes_without_empty_fields() {
        let row = Component::action_row(vec![Component::button(
            "ping_button",
            "Click me!",
            BUTTON_STYLE_PRIMARY,
        )]);

        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({
                "type": 1,
                "components": [{
                    "type": 2,
                    "custom_id": "ping_button",
                    "label": "Click me!",
                    "style": 1
                }]
            })
        );
    }
}
