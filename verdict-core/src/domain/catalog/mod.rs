// verdict-core/src/domain/catalog/mod.rs

pub mod component;
pub mod option;

pub use component::{Component, ComponentType, SelectionMode};
pub use option::ComponentOption;
