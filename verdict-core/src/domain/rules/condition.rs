// verdict-core/src/domain/rules/condition.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::domain::error::DomainError;

/// Operator tag as persisted (`eq`, `not_in`, `is_selected`...).
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Eq,
    Neq,
    In,
    NotIn,
    Contains,
    IsSelected,
    IsNotSelected,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Contains => "contains",
            Self::IsSelected => "is_selected",
            Self::IsNotSelected => "is_not_selected",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operator together with a value of the shape it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Eq(String),
    Neq(String),
    In(Vec<String>),
    NotIn(Vec<String>),
    Contains(String),
    IsSelected,
    IsNotSelected,
    Gt(f64),
    Gte(f64),
    Lt(f64),
    Lte(f64),
}

impl Predicate {
    pub fn operator(&self) -> Operator {
        match self {
            Self::Eq(_) => Operator::Eq,
            Self::Neq(_) => Operator::Neq,
            Self::In(_) => Operator::In,
            Self::NotIn(_) => Operator::NotIn,
            Self::Contains(_) => Operator::Contains,
            Self::IsSelected => Operator::IsSelected,
            Self::IsNotSelected => Operator::IsNotSelected,
            Self::Gt(_) => Operator::Gt,
            Self::Gte(_) => Operator::Gte,
            Self::Lt(_) => Operator::Lt,
            Self::Lte(_) => Operator::Lte,
        }
    }

    fn value(&self) -> Value {
        match self {
            Self::Eq(v) | Self::Neq(v) | Self::Contains(v) => Value::String(v.clone()),
            Self::In(vs) | Self::NotIn(vs) => {
                Value::Array(vs.iter().cloned().map(Value::String).collect())
            }
            Self::IsSelected | Self::IsNotSelected => Value::Bool(true),
            Self::Gt(n) | Self::Gte(n) | Self::Lt(n) | Self::Lte(n) => {
                serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number)
            }
        }
    }
}

/// `{ componentId, operator, value }` — one clause of a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCondition", into = "RawCondition")]
pub struct Condition {
    pub component_id: String,
    pub predicate: Predicate,
}

impl Condition {
    pub fn new(component_id: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            component_id: component_id.into(),
            predicate,
        }
    }

    pub fn eq(component_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self::new(component_id, Predicate::Eq(option_id.into()))
    }

    pub fn operator(&self) -> Operator {
        self.predicate.operator()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCondition {
    component_id: String,
    operator: Operator,
    #[serde(default)]
    value: Value,
}

impl TryFrom<RawCondition> for Condition {
    type Error = DomainError;

    fn try_from(raw: RawCondition) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| DomainError::InvalidCondition {
            component_id: raw.component_id.clone(),
            operator: raw.operator.to_string(),
            reason: reason.to_string(),
        };

        let text = || scalar_text(&raw.value).ok_or_else(|| invalid("expected a text value"));
        let list = || {
            let Value::Array(items) = &raw.value else {
                return Err(invalid("expected a list of values"));
            };
            items
                .iter()
                .map(|item| scalar_text(item).ok_or_else(|| invalid("list items must be text")))
                .collect::<Result<Vec<_>, _>>()
        };
        let number = || number_value(&raw.value).ok_or_else(|| invalid("expected a number"));

        let predicate = match raw.operator {
            Operator::Eq => Predicate::Eq(text()?),
            Operator::Neq => Predicate::Neq(text()?),
            Operator::Contains => Predicate::Contains(text()?),
            Operator::In => Predicate::In(list()?),
            Operator::NotIn => Predicate::NotIn(list()?),
            Operator::IsSelected => Predicate::IsSelected,
            Operator::IsNotSelected => Predicate::IsNotSelected,
            Operator::Gt => Predicate::Gt(number()?),
            Operator::Gte => Predicate::Gte(number()?),
            Operator::Lt => Predicate::Lt(number()?),
            Operator::Lte => Predicate::Lte(number()?),
        };

        Ok(Self {
            component_id: raw.component_id,
            predicate,
        })
    }
}

impl From<Condition> for RawCondition {
    fn from(condition: Condition) -> Self {
        Self {
            operator: condition.operator(),
            value: condition.predicate.value(),
            component_id: condition.component_id,
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_deserialize_each_shape() -> Result<()> {
        let eq: Condition =
            serde_yaml::from_str("componentId: color\noperator: eq\nvalue: red")?;
        assert_eq!(eq, Condition::eq("color", "red"));

        let within: Condition =
            serde_json::from_str(r#"{"componentId":"c","operator":"in","value":["a","b"]}"#)?;
        assert_eq!(within.predicate, Predicate::In(vec!["a".into(), "b".into()]));

        let selected: Condition =
            serde_json::from_str(r#"{"componentId":"c","operator":"is_selected","value":true}"#)?;
        assert_eq!(selected.predicate, Predicate::IsSelected);

        // value may be omitted entirely for presence checks
        let absent: Condition =
            serde_yaml::from_str("componentId: c\noperator: is_not_selected")?;
        assert_eq!(absent.predicate, Predicate::IsNotSelected);

        let gt: Condition = serde_yaml::from_str("componentId: qty\noperator: gte\nvalue: 5")?;
        assert_eq!(gt.predicate, Predicate::Gte(5.0));
        Ok(())
    }

    #[test]
    fn test_wrong_value_shape_is_rejected() {
        let err = serde_json::from_str::<Condition>(
            r#"{"componentId":"c","operator":"in","value":"a"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected a list"));

        assert!(
            serde_json::from_str::<Condition>(r#"{"componentId":"c","operator":"gt","value":"big"}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<Condition>(r#"{"componentId":"c","operator":"eq"}"#).is_err()
        );
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        assert!(
            serde_json::from_str::<Condition>(r#"{"componentId":"c","operator":"like","value":"a"}"#)
                .is_err()
        );
    }

    #[test]
    fn test_serialize_keeps_persisted_shape() -> Result<()> {
        let json = serde_json::to_value(Condition::new(
            "c",
            Predicate::NotIn(vec!["a".into()]),
        ))?;
        assert_eq!(
            json,
            serde_json::json!({"componentId": "c", "operator": "not_in", "value": ["a"]})
        );
        Ok(())
    }
}
