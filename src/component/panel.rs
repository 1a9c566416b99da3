//! Panel — a positioned container holding one nested component.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::codec::{ConfigFields, DecodeCx, to_value};
use crate::component::Component;
use crate::error::DecodeError;
use crate::metadata::Metadata;

/// Wire discriminator for panels.
pub const TAG: &str = "Panel";

/// Relative location and span of a panel within a grid.
///
/// No negativity or overlap validation happens here; values persist
/// verbatim through encode/decode and the rendering consumer interprets
/// them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

/// A container placing exactly one child component at a grid position. The
/// panel owns its content outright; the child is dropped with the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    metadata: Metadata,
    content: Box<Component>,
    position: Position,
}

impl Panel {
    /// Create a panel wrapping an already-constructed component.
    #[must_use]
    pub fn new(title: impl Into<String>, content: Component) -> Self {
        Self {
            metadata: Metadata::new(TAG, Some(title.into())),
            content: Box::new(content),
            position: Position::default(),
        }
    }

    /// Place the panel in the grid. No bounds validation — deferred to the
    /// consumer.
    pub fn set_position(&mut self, x: i64, y: i64, w: i64, h: i64) {
        self.position = Position { x, y, w, h };
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub(crate) fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn content(&self) -> &Component {
        &self.content
    }

    pub(crate) fn config_value(&self) -> Value {
        json!({
            "content": to_value(&self.content),
            "position": self.position,
        })
    }
}

/// Finish decoding a panel from its envelope and config payload. `content`
/// re-enters the generic typed-object decode, which is the recursive step
/// permitting arbitrary nesting.
pub(crate) fn decode(
    metadata: &Map<String, Value>,
    config: &Value,
    cx: &mut DecodeCx,
) -> Result<Component, DecodeError> {
    let fields = ConfigFields::new(TAG, config);
    let position: Position = serde_json::from_value(fields.get("position")?.clone())
        .map_err(|_| fields.invalid("position"))?;
    let content = cx.decode_nested(fields.get("content")?)?;

    Ok(Component::Panel(Panel {
        metadata: Metadata::from_wire(TAG, metadata),
        content: Box::new(content),
        position,
    }))
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;
