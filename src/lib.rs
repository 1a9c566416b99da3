//! Typed view-component model and self-describing wire codec.
//!
//! A backend builds a tree of [`Component`] values describing what a
//! dashboard should render, encodes the tree into a single self-describing
//! JSON document, and hands the bytes to a transport layer. On the far side
//! the same document decodes back into the identical tree: every node
//! carries a `metadata.type` discriminator, and a startup-built [`Registry`]
//! maps each discriminator to the decoder that reconstructs the concrete
//! variant.
//!
//! The codec is synchronous and pure — no I/O, no locks, no partial
//! results. Transports and renderers live elsewhere and consume the encoded
//! document as-is.

pub mod codec;
pub mod component;
pub mod error;
pub mod metadata;
pub mod registry;

pub use codec::{DEFAULT_MAX_DEPTH, DecodeOptions, decode_component, encode_component, from_value, to_value};
pub use component::{Component, Link, List, Panel, Position, Text, Timestamp};
pub use error::DecodeError;
pub use metadata::Metadata;
pub use registry::Registry;
