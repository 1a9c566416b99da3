//! Timestamp — a leaf component carrying seconds since the Unix epoch.
//!
//! The value is opaque to this crate; the renderer decides how to present
//! it (relative, absolute, zoned).

use serde_json::{Map, Value, json};

use crate::codec::{ConfigFields, DecodeCx};
use crate::component::Component;
use crate::error::DecodeError;
use crate::metadata::Metadata;

/// Wire discriminator for timestamps.
pub const TAG: &str = "Timestamp";

#[derive(Debug, Clone, PartialEq)]
pub struct Timestamp {
    metadata: Metadata,
    timestamp: i64,
}

impl Timestamp {
    /// Create a timestamp component from epoch seconds.
    #[must_use]
    pub fn new(epoch_seconds: i64) -> Self {
        Self { metadata: Metadata::new(TAG, None), timestamp: epoch_seconds }
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub(crate) fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.timestamp
    }

    pub(crate) fn config_value(&self) -> Value {
        json!({ "timestamp": self.timestamp })
    }
}

pub(crate) fn decode(
    metadata: &Map<String, Value>,
    config: &Value,
    _cx: &mut DecodeCx,
) -> Result<Component, DecodeError> {
    let fields = ConfigFields::new(TAG, config);
    Ok(Component::Timestamp(Timestamp {
        metadata: Metadata::from_wire(TAG, metadata),
        timestamp: fields.i64("timestamp")?,
    }))
}
