//! Discriminator → decoder registry.
//!
//! DESIGN
//! ======
//! Resolution (tag → decoder) is split from payload parsing (decoder →
//! concrete value) so a new variant is one `register` call plus its own
//! module — the generic decode protocol in [`crate::codec`] never changes.
//! The process-wide table is assembled once inside a `LazyLock` initializer
//! and never mutated afterwards, so concurrent decoders read it without
//! locking.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::codec::DecodeCx;
use crate::component::{Component, link, list, panel, text, timestamp};
use crate::error::DecodeError;

/// Finishes reconstructing one concrete variant from its wire `metadata`
/// block and `config` payload. Nested component fields re-enter the generic
/// decode through the context.
pub type DecodeFn = fn(&Map<String, Value>, &Value, &mut DecodeCx) -> Result<Component, DecodeError>;

/// Lookup table from wire discriminator to variant decoder. Immutable once
/// built.
pub struct Registry {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { decoders: HashMap::new() }
    }

    /// Register the decoder for `tag`. Called once per variant while the
    /// table is being assembled.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is already registered. A duplicate tag would make
    /// decode ambiguous, so the process must not come up with one.
    pub fn register(&mut self, tag: &'static str, decode: DecodeFn) {
        assert!(
            self.decoders.insert(tag, decode).is_none(),
            "duplicate component tag registered: {tag}"
        );
    }

    /// Resolve `tag` to its decoder.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownVariant`] for any tag outside the
    /// registered set, carrying the offending tag.
    pub fn resolve(&self, tag: &str) -> Result<DecodeFn, DecodeError> {
        self.decoders
            .get(tag)
            .copied()
            .ok_or_else(|| DecodeError::UnknownVariant(tag.to_owned()))
    }

    /// Tags currently registered, for diagnostics.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = self.decoders.keys().copied().collect();
        tags.sort_unstable();
        tags
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// GLOBAL TABLE
// =============================================================================

static GLOBAL: LazyLock<Registry> = LazyLock::new(builtin);

fn builtin() -> Registry {
    let mut registry = Registry::new();
    registry.register(panel::TAG, panel::decode);
    registry.register(text::TAG, text::decode);
    registry.register(link::TAG, link::decode);
    registry.register(list::TAG, list::decode);
    registry.register(timestamp::TAG, timestamp::decode);
    registry
}

/// The process-wide registry holding every built-in variant. Built on first
/// use; `LazyLock` synchronizes the one-time assembly, after which the table
/// is read-only.
#[must_use]
pub fn global() -> &'static Registry {
    &GLOBAL
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
