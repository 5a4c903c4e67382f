// verdict-core/src/domain/rules/action.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// Action tag as persisted.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    ShowError,
    ShowWarning,
    HideComponent,
    ShowComponent,
    DisableOption,
    SetDefault,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShowError => "SHOW_ERROR",
            Self::ShowWarning => "SHOW_WARNING",
            Self::HideComponent => "HIDE_COMPONENT",
            Self::ShowComponent => "SHOW_COMPONENT",
            Self::DisableOption => "DISABLE_OPTION",
            Self::SetDefault => "SET_DEFAULT",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a fired rule does: surface a message, or adjust what the shopper
/// can see and pick.
///
/// Persisted as `{ type, value }` for messages and
/// `{ type, componentId, optionId? }` for component/option actions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(try_from = "RawAction", into = "RawAction")]
pub enum RuleAction {
    ShowError(String),
    ShowWarning(String),
    HideComponent(String),
    /// Cancels an earlier `HideComponent` for the same component.
    ShowComponent(String),
    DisableOption {
        component_id: String,
        option_id: String,
    },
    /// The option the shopper is expected to pick for a component.
    SetDefault {
        component_id: String,
        option_id: String,
    },
}

impl RuleAction {
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::ShowError(_) => ActionType::ShowError,
            Self::ShowWarning(_) => ActionType::ShowWarning,
            Self::HideComponent(_) => ActionType::HideComponent,
            Self::ShowComponent(_) => ActionType::ShowComponent,
            Self::DisableOption { .. } => ActionType::DisableOption,
            Self::SetDefault { .. } => ActionType::SetDefault,
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowError(msg) => write!(f, "error: {msg}"),
            Self::ShowWarning(msg) => write!(f, "warning: {msg}"),
            Self::HideComponent(id) => write!(f, "hide {id}"),
            Self::ShowComponent(id) => write!(f, "show {id}"),
            Self::DisableOption {
                component_id,
                option_id,
            } => write!(f, "disable {component_id}/{option_id}"),
            Self::SetDefault {
                component_id,
                option_id,
            } => write!(f, "default {component_id}/{option_id}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAction {
    #[serde(rename = "type")]
    action_type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    option_id: Option<String>,
}

impl TryFrom<RawAction> for RuleAction {
    type Error = DomainError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let missing = |field: &str| DomainError::InvalidAction {
            action: raw.action_type.to_string(),
            reason: format!("missing `{field}`"),
        };
        let message = || raw.value.clone().ok_or_else(|| missing("value"));
        let component = || raw.component_id.clone().ok_or_else(|| missing("componentId"));
        let option = || raw.option_id.clone().ok_or_else(|| missing("optionId"));

        Ok(match raw.action_type {
            ActionType::ShowError => Self::ShowError(message()?),
            ActionType::ShowWarning => Self::ShowWarning(message()?),
            ActionType::HideComponent => Self::HideComponent(component()?),
            ActionType::ShowComponent => Self::ShowComponent(component()?),
            ActionType::DisableOption => Self::DisableOption {
                component_id: component()?,
                option_id: option()?,
            },
            ActionType::SetDefault => Self::SetDefault {
                component_id: component()?,
                option_id: option()?,
            },
        })
    }
}

impl From<RuleAction> for RawAction {
    fn from(action: RuleAction) -> Self {
        let action_type = action.action_type();
        let (value, component_id, option_id) = match action {
            RuleAction::ShowError(msg) | RuleAction::ShowWarning(msg) => (Some(msg), None, None),
            RuleAction::HideComponent(id) | RuleAction::ShowComponent(id) => (None, Some(id), None),
            RuleAction::DisableOption {
                component_id,
                option_id,
            }
            | RuleAction::SetDefault {
                component_id,
                option_id,
            } => (None, Some(component_id), Some(option_id)),
        };
        Self {
            action_type,
            value,
            component_id,
            option_id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_message_actions() -> Result<()> {
        let action: RuleAction =
            serde_json::from_str(r#"{"type":"SHOW_WARNING","value":"Engraving adds 2 days"}"#)?;
        assert_eq!(action, RuleAction::ShowWarning("Engraving adds 2 days".into()));

        let yaml = "type: SHOW_ERROR\nvalue: Not available in gold";
        let action: RuleAction = serde_yaml::from_str(yaml)?;
        assert_eq!(action.action_type(), ActionType::ShowError);
        assert_eq!(action.to_string(), "error: Not available in gold");
        Ok(())
    }

    #[test]
    fn test_component_and_option_actions() -> Result<()> {
        let actions: Vec<RuleAction> = serde_json::from_str(
            r#"[
                {"type": "HIDE_COMPONENT", "componentId": "comp-c"},
                {"type": "SHOW_COMPONENT", "componentId": "comp-c"},
                {"type": "DISABLE_OPTION", "componentId": "comp-b", "optionId": "opt-b2"},
                {"type": "SET_DEFAULT", "componentId": "comp-b", "optionId": "opt-b1"}
            ]"#,
        )?;
        assert_eq!(
            actions,
            vec![
                RuleAction::HideComponent("comp-c".into()),
                RuleAction::ShowComponent("comp-c".into()),
                RuleAction::DisableOption {
                    component_id: "comp-b".into(),
                    option_id: "opt-b2".into(),
                },
                RuleAction::SetDefault {
                    component_id: "comp-b".into(),
                    option_id: "opt-b1".into(),
                },
            ]
        );

        // written back in the same persisted shape
        let json = serde_json::to_value(&actions[2])?;
        assert_eq!(
            json,
            serde_json::json!({"type": "DISABLE_OPTION", "componentId": "comp-b", "optionId": "opt-b2"})
        );
        Ok(())
    }

    #[test]
    fn test_missing_target_is_rejected() {
        let err = serde_json::from_str::<RuleAction>(r#"{"type":"DISABLE_OPTION","componentId":"comp-b"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("optionId"));
        assert!(serde_json::from_str::<RuleAction>(r#"{"type":"HIDE_COMPONENT","value":"x"}"#).is_err());
    }

    #[test]
    fn test_pricing_actions_are_rejected() {
        assert!(
            serde_json::from_str::<RuleAction>(r#"{"type":"SET_PRICE","componentId":"a","optionId":"b"}"#)
                .is_err()
        );
    }
}
