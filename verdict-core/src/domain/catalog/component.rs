// verdict-core/src/domain/catalog/component.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::option::ComponentOption;
use crate::domain::default_true;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Mesh,
    Material,
    Texture,
    Color,
    Decal,
    Accessory,
    Size,
    Engraving,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mesh => "MESH",
            Self::Material => "MATERIAL",
            Self::Texture => "TEXTURE",
            Self::Color => "COLOR",
            Self::Decal => "DECAL",
            Self::Accessory => "ACCESSORY",
            Self::Size => "SIZE",
            Self::Engraving => "ENGRAVING",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

/// One configurable axis of a product (color, material, engraving...).
///
/// Deserializes from the camelCase shape persisted by the customizer
/// configuration editor. Unknown fields (pricing, camera, urls) are ignored.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[validate(length(min = 1, message = "Component id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Component name cannot be empty"))]
    pub name: String,

    #[serde(rename = "type")]
    pub component_type: ComponentType,

    #[serde(default)]
    pub selection_mode: SelectionMode,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub min_selections: u32,

    #[serde(default = "default_max_selections")]
    pub max_selections: u32,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default = "default_true")]
    pub is_visible: bool,

    #[serde(default = "default_true")]
    pub is_enabled: bool,

    #[validate(nested)]
    #[serde(default)]
    pub options: Vec<ComponentOption>,
}

fn default_max_selections() -> u32 {
    1
}

impl Component {
    /// Optional single-choice component, visible and enabled, with no options.
    pub fn new(id: impl Into<String>, name: impl Into<String>, component_type: ComponentType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type,
            selection_mode: SelectionMode::Single,
            is_required: false,
            min_selections: 0,
            max_selections: 1,
            sort_order: 0,
            is_visible: true,
            is_enabled: true,
            options: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn multiple(mut self, min: u32, max: u32) -> Self {
        self.selection_mode = SelectionMode::Multiple;
        self.min_selections = min;
        self.max_selections = max;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    /// Appends options, re-pointing their back-reference at this component.
    pub fn with_options(mut self, options: impl IntoIterator<Item = ComponentOption>) -> Self {
        let id = self.id.clone();
        self.options.extend(options.into_iter().map(|mut o| {
            o.component_id = id.clone();
            o
        }));
        self
    }

    /// Hidden or disabled components never take part in validation.
    pub fn is_active(&self) -> bool {
        self.is_visible && self.is_enabled
    }

    pub fn find_option(&self, option_id: &str) -> Option<&ComponentOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}
