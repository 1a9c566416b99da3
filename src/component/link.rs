//! Link — a leaf component pairing a display string with a target URL.

use serde_json::{Map, Value, json};

use crate::codec::{ConfigFields, DecodeCx};
use crate::component::Component;
use crate::error::DecodeError;
use crate::metadata::Metadata;

/// Wire discriminator for links.
pub const TAG: &str = "Link";

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    metadata: Metadata,
    value: String,
    target: String,
}

impl Link {
    /// Create a link showing `value` and pointing at `target`.
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(TAG, Some(title.into())),
            value: value.into(),
            target: target.into(),
        }
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub(crate) fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Display string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Target URL. Wire key `ref`.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    pub(crate) fn config_value(&self) -> Value {
        json!({ "value": self.value, "ref": self.target })
    }
}

pub(crate) fn decode(
    metadata: &Map<String, Value>,
    config: &Value,
    _cx: &mut DecodeCx,
) -> Result<Component, DecodeError> {
    let fields = ConfigFields::new(TAG, config);
    Ok(Component::Link(Link {
        metadata: Metadata::from_wire(TAG, metadata),
        value: fields.str("value")?.to_owned(),
        target: fields.str("ref")?.to_owned(),
    }))
}
