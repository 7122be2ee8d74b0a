//! Configuration options for outline extraction.

use serde::{Deserialize, Serialize};

/// Options controlling outline extraction.
///
/// Loading these from a file or CLI is the host application's job; the
/// library only consumes the values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Node query selecting the headings that form the outline.
    ///
    /// `None` or an empty string disables outline extraction entirely: no
    /// headings are queried, no bookmark entries are produced and the
    /// catalog carries no Outlines reference.
    #[serde(default)]
    pub outline_selector: Option<String>,
}

impl Options {
    /// Create options with outline extraction disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outline selector.
    pub fn with_outline_selector(mut self, selector: impl Into<String>) -> Self {
        self.outline_selector = Some(selector.into());
        self
    }

    /// The selector, if outline extraction is enabled.
    pub fn outline_selector(&self) -> Option<&str> {
        match self.outline_selector.as_deref() {
            Some("") | None => None,
            Some(s) => Some(s),
        }
    }
}
