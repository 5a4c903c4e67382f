// verdict-core/src/domain/catalog/option.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::default_true;

/// One selectable value within a component.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOption {
    #[validate(length(min = 1, message = "Option id cannot be empty"))]
    pub id: String,

    // Back-reference only; may be omitted when options are nested in their component.
    #[serde(default)]
    pub component_id: String,

    pub name: String,

    #[serde(rename = "type", default)]
    pub option_type: String,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default = "default_true")]
    pub is_enabled: bool,

    #[serde(default = "default_true")]
    pub is_visible: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
}

impl ComponentOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_id: String::new(),
            name: name.into(),
            option_type: String::new(),
            sort_order: 0,
            is_default: false,
            is_enabled: true,
            is_visible: true,
            in_stock: None,
            stock_quantity: None,
        }
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn with_stock_quantity(mut self, quantity: i64) -> Self {
        self.stock_quantity = Some(quantity);
        self
    }

    /// Unknown stock counts as available; only an explicit `false` or a zero
    /// quantity is out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.in_stock == Some(false) || self.stock_quantity == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_stock_is_available() {
        assert!(!ComponentOption::new("a", "A").is_out_of_stock());
    }

    #[test]
    fn test_out_of_stock_flags() {
        assert!(ComponentOption::new("a", "A").with_in_stock(false).is_out_of_stock());
        assert!(ComponentOption::new("a", "A").with_stock_quantity(0).is_out_of_stock());
        // Either flag alone is enough
        assert!(
            ComponentOption::new("a", "A")
                .with_in_stock(true)
                .with_stock_quantity(0)
                .is_out_of_stock()
        );
        assert!(
            !ComponentOption::new("a", "A")
                .with_in_stock(true)
                .with_stock_quantity(3)
                .is_out_of_stock()
        );
    }
}
