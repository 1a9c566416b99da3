//! Generic typed-object marshal/unmarshal protocol.
//!
//! ARCHITECTURE
//! ============
//! Every node on the wire is the same two-key document:
//!
//! ```json
//! { "metadata": { "type": "<tag>", "title": "...", ... },
//!   "config":   { <variant-specific fields> } }
//! ```
//!
//! Encode asks the variant for its `config` payload and overlays the
//! envelope so `metadata.type` always reflects the true runtime variant.
//! Decode reads the discriminator first, resolves it through the
//! [`crate::registry`], and hands the rest of the document to the resolved
//! decoder. Container variants funnel their component-valued fields back
//! through [`DecodeCx::decode_nested`], which is where arbitrary nesting —
//! and the depth bound guarding against hostile documents — lives.

use serde_json::{Map, Value};

use crate::component::Component;
use crate::error::DecodeError;
use crate::registry;

/// Default bound on document nesting depth. Generous for real dashboards;
/// small enough that a hostile document cannot blow the stack.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Knobs for a decode call.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Maximum component nesting depth admitted before the document is
    /// rejected with [`DecodeError::DepthExceeded`]. The root component
    /// counts as depth 1.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

// =============================================================================
// ENCODE
// =============================================================================

/// Encode a component tree into a single wire document.
#[must_use]
pub fn to_value(component: &Component) -> Value {
    let mut doc = Map::new();
    doc.insert("metadata".into(), component.metadata().to_value());
    doc.insert("config".into(), component.config_value());
    Value::Object(doc)
}

/// Encode a component tree into bytes for transport handoff.
#[must_use]
pub fn encode_component(component: &Component) -> Vec<u8> {
    // Serializing an in-memory `Value` tree with string keys is infallible.
    serde_json::to_vec(&to_value(component)).unwrap_or_default()
}

// =============================================================================
// DECODE
// =============================================================================

/// Decode a wire document from raw transport bytes.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedDocument`] for bytes that are not
/// well-formed JSON, plus every error [`from_value`] can produce.
pub fn decode_component(bytes: &[u8], options: DecodeOptions) -> Result<Component, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    from_value(&value, options)
}

/// Decode an already-parsed wire document into a component tree.
///
/// # Errors
///
/// Returns [`DecodeError::MissingTypeTag`] when the envelope lacks a
/// discriminator, [`DecodeError::UnknownVariant`] for unregistered tags,
/// [`DecodeError::InvalidPayload`] when a variant field fails its own
/// parsing, and [`DecodeError::DepthExceeded`] when nesting passes
/// `options.max_depth`. Any failure in a descendant aborts the whole decode.
pub fn from_value(value: &Value, options: DecodeOptions) -> Result<Component, DecodeError> {
    DecodeCx::new(options).decode_nested(value)
}

/// Per-call decode state threaded through nested component fields.
pub struct DecodeCx {
    options: DecodeOptions,
    depth: usize,
}

impl DecodeCx {
    fn new(options: DecodeOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Decode one typed-object document, one nesting level deeper.
    /// Container decoders call this for each component-valued field.
    ///
    /// # Errors
    ///
    /// Same surface as [`from_value`].
    pub fn decode_nested(&mut self, value: &Value) -> Result<Component, DecodeError> {
        if self.depth >= self.options.max_depth {
            tracing::debug!(limit = self.options.max_depth, "rejecting over-deep component document");
            return Err(DecodeError::DepthExceeded { limit: self.options.max_depth });
        }
        self.depth += 1;
        let component = self.decode_typed(value);
        self.depth -= 1;
        component
    }

    fn decode_typed(&mut self, value: &Value) -> Result<Component, DecodeError> {
        let Some(metadata) = value.get("metadata").and_then(Value::as_object) else {
            return Err(DecodeError::MissingTypeTag);
        };
        let Some(tag) = metadata.get("type").and_then(Value::as_str) else {
            return Err(DecodeError::MissingTypeTag);
        };

        let decode = match registry::global().resolve(tag) {
            Ok(decode) => decode,
            Err(err) => {
                tracing::debug!(tag, "component tag not in registry");
                return Err(err);
            }
        };

        let config = value.get("config").unwrap_or(&Value::Null);
        decode(metadata, config, self)
    }
}

// =============================================================================
// CONFIG FIELD ACCESS
// =============================================================================

/// Typed access to a variant's `config` payload with field-level errors.
/// Every miss becomes [`DecodeError::InvalidPayload`] carrying the variant
/// tag and the field path.
pub(crate) struct ConfigFields<'a> {
    tag: &'static str,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> ConfigFields<'a> {
    pub(crate) fn new(tag: &'static str, config: &'a Value) -> Self {
        Self { tag, fields: config.as_object() }
    }

    pub(crate) fn get(&self, field: &str) -> Result<&'a Value, DecodeError> {
        self.fields
            .and_then(|fields| fields.get(field))
            .ok_or_else(|| self.invalid(field))
    }

    pub(crate) fn str(&self, field: &str) -> Result<&'a str, DecodeError> {
        self.get(field)?.as_str().ok_or_else(|| self.invalid(field))
    }

    pub(crate) fn i64(&self, field: &str) -> Result<i64, DecodeError> {
        self.get(field)?.as_i64().ok_or_else(|| self.invalid(field))
    }

    pub(crate) fn invalid(&self, field: &str) -> DecodeError {
        DecodeError::InvalidPayload { tag: self.tag, field: field.to_owned() }
    }
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;
