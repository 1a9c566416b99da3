//! Decode error taxonomy for the typed-object wire protocol.
//!
//! Every failure aborts the decode of the offending node, and because
//! nesting is recursive the failure propagates up through every enclosing
//! container — there is no best-effort reconstruction of an ancestor when a
//! descendant is broken.

/// Errors produced when decoding a wire document into a component tree.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input bytes are not well-formed JSON.
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// The document's metadata block lacks a `type` discriminator.
    #[error("document metadata is missing the type tag")]
    MissingTypeTag,

    /// The discriminator does not name any registered variant. Carries the
    /// offending tag so callers can log it; unknown variants are never
    /// coerced into a default component.
    #[error("unknown component variant: {0}")]
    UnknownVariant(String),

    /// A variant-specific config field failed to parse.
    #[error("invalid {tag} payload: field {field}")]
    InvalidPayload {
        /// Discriminator of the variant whose payload was being parsed.
        tag: &'static str,
        /// Path of the field that failed, relative to the `config` block.
        field: String,
    },

    /// The document nests components deeper than the configured limit.
    #[error("component nesting exceeds depth limit {limit}")]
    DepthExceeded {
        /// The limit that was in force, from [`crate::codec::DecodeOptions`].
        limit: usize,
    },
}
