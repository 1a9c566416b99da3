//! List — a container holding an ordered sequence of components.
//!
//! The second container variant alongside [`crate::component::Panel`];
//! every item runs through the same generic typed-object decode, so lists
//! of panels of lists nest like any other tree.

use serde_json::{Map, Value, json};

use crate::codec::{ConfigFields, DecodeCx, to_value};
use crate::component::Component;
use crate::error::DecodeError;
use crate::metadata::Metadata;

/// Wire discriminator for lists.
pub const TAG: &str = "List";

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    metadata: Metadata,
    items: Vec<Component>,
}

impl List {
    /// Create a list over already-constructed items.
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<Component>) -> Self {
        Self { metadata: Metadata::new(TAG, Some(title.into())), items }
    }

    /// Append one item.
    pub fn push(&mut self, item: impl Into<Component>) {
        self.items.push(item.into());
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub(crate) fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    #[must_use]
    pub fn items(&self) -> &[Component] {
        &self.items
    }

    pub(crate) fn config_value(&self) -> Value {
        let items: Vec<Value> = self.items.iter().map(to_value).collect();
        json!({ "items": items })
    }
}

pub(crate) fn decode(
    metadata: &Map<String, Value>,
    config: &Value,
    cx: &mut DecodeCx,
) -> Result<Component, DecodeError> {
    let fields = ConfigFields::new(TAG, config);
    let raw_items = fields.get("items")?.as_array().ok_or_else(|| fields.invalid("items"))?;

    let mut items = Vec::with_capacity(raw_items.len());
    for raw in raw_items {
        items.push(cx.decode_nested(raw)?);
    }

    Ok(Component::List(List {
        metadata: Metadata::from_wire(TAG, metadata),
        items,
    }))
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
