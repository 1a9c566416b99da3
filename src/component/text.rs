//! Text — a leaf component carrying a display string.

use serde_json::{Map, Value, json};

use crate::codec::{ConfigFields, DecodeCx};
use crate::component::Component;
use crate::error::DecodeError;
use crate::metadata::Metadata;

/// Wire discriminator for text components.
pub const TAG: &str = "Text";

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    metadata: Metadata,
    value: String,
}

impl Text {
    /// Create an untitled text component.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self { metadata: Metadata::new(TAG, None), value: value.into() }
    }

    /// Create a titled text component.
    #[must_use]
    pub fn with_title(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self { metadata: Metadata::new(TAG, Some(title.into())), value: value.into() }
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub(crate) fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn config_value(&self) -> Value {
        json!({ "value": self.value })
    }
}

pub(crate) fn decode(
    metadata: &Map<String, Value>,
    config: &Value,
    _cx: &mut DecodeCx,
) -> Result<Component, DecodeError> {
    let fields = ConfigFields::new(TAG, config);
    Ok(Component::Text(Text {
        metadata: Metadata::from_wire(TAG, metadata),
        value: fields.str("value")?.to_owned(),
    }))
}
