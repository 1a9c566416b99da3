//! Component envelope — the metadata block every variant carries.

use serde_json::{Map, Value};

/// Envelope fields shared by every component variant: the wire
/// discriminator, an optional display title, and an opaque mapping of
/// variant-independent annotations.
///
/// Not independently constructible — a variant constructor is the single
/// place a discriminator is assigned, and no operation mutates it
/// afterwards. That invariant is what keeps decode → re-encode idempotent.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    tag: &'static str,
    title: Option<String>,
    extra: Map<String, Value>,
}

impl Metadata {
    pub(crate) fn new(tag: &'static str, title: Option<String>) -> Self {
        Self { tag, title, extra: Map::new() }
    }

    /// The wire discriminator. Fixed at construction, no mutator exists.
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        self.tag
    }

    /// Display title, when set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Opaque annotations (accessibility hints etc.). Carried verbatim
    /// through encode/decode, never interpreted by this crate.
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Attach an opaque annotation under `key`.
    pub fn insert_extra(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.extra.insert(key.into(), value.into());
    }

    /// Serialize the envelope as the wire `metadata` block. The
    /// discriminator is written last so it always reflects the runtime
    /// variant, whatever the annotations contain.
    pub(crate) fn to_value(&self) -> Value {
        let mut block = self.extra.clone();
        if let Some(title) = &self.title {
            block.insert("title".into(), Value::String(title.clone()));
        }
        block.insert("type".into(), Value::String(self.tag.to_owned()));
        Value::Object(block)
    }

    /// Rebuild the envelope from a wire `metadata` block. The caller has
    /// already resolved `tag` against the block's `type` field, so the
    /// decoded envelope's discriminator matches the variant being built by
    /// construction.
    pub(crate) fn from_wire(tag: &'static str, block: &Map<String, Value>) -> Self {
        let title = block.get("title").and_then(Value::as_str).map(str::to_owned);
        let mut extra = block.clone();
        extra.remove("type");
        extra.remove("title");
        Self { tag, title, extra }
    }
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
