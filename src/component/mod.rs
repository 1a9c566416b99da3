//! View component variants and the polymorphic sum type.
//!
//! Each variant module owns its wire tag, its `config` payload shape, and
//! the decoder registered for it. [`Component`] is the closed sum over the
//! family; adding a kind means a new module, a new arm here, and one
//! `register` call in [`crate::registry`].

pub mod link;
pub mod list;
pub mod panel;
pub mod text;
pub mod timestamp;

pub use link::Link;
pub use list::List;
pub use panel::{Panel, Position};
pub use text::Text;
pub use timestamp::Timestamp;

use serde_json::Value;

use crate::metadata::Metadata;

/// One node in a dashboard description tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Panel(Panel),
    Text(Text),
    Link(Link),
    List(List),
    Timestamp(Timestamp),
}

impl Component {
    /// The wire discriminator of the concrete variant.
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        self.metadata().type_tag()
    }

    /// Envelope fields shared by every variant.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        match self {
            Self::Panel(c) => c.metadata(),
            Self::Text(c) => c.metadata(),
            Self::Link(c) => c.metadata(),
            Self::List(c) => c.metadata(),
            Self::Timestamp(c) => c.metadata(),
        }
    }

    /// Mutable envelope access. Title and opaque annotations only — the
    /// discriminator has no mutator.
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        match self {
            Self::Panel(c) => c.metadata_mut(),
            Self::Text(c) => c.metadata_mut(),
            Self::Link(c) => c.metadata_mut(),
            Self::List(c) => c.metadata_mut(),
            Self::Timestamp(c) => c.metadata_mut(),
        }
    }

    /// Display title, when set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.metadata().title()
    }

    /// Variant-specific `config` payload.
    pub(crate) fn config_value(&self) -> Value {
        match self {
            Self::Panel(c) => c.config_value(),
            Self::Text(c) => c.config_value(),
            Self::Link(c) => c.config_value(),
            Self::List(c) => c.config_value(),
            Self::Timestamp(c) => c.config_value(),
        }
    }
}

impl From<Panel> for Component {
    fn from(panel: Panel) -> Self {
        Self::Panel(panel)
    }
}

impl From<Text> for Component {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Link> for Component {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

impl From<List> for Component {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Timestamp> for Component {
    fn from(timestamp: Timestamp) -> Self {
        Self::Timestamp(timestamp)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
