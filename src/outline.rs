//! Outline tree construction from document headings.
//!
//! Turns a flat, level-tagged heading sequence into the parent-per-node
//! relation that the bookmark object graph is later derived from. Nesting
//! follows heading level alone: the parent of a heading is the nearest
//! preceding heading with a strictly smaller level, whatever the tag
//! vocabulary (H1..H6 or any other ordinal scheme).

use crate::config::Options;
use indexmap::IndexMap;

/// A heading node selected from the source document.
///
/// `path` is the node's stable structural identity (a path-like fingerprint
/// assigned by the document layer), never a memory address. Equal paths mean
/// the same node, which makes store insertion idempotent per node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Nesting level, >= 1. Only relative order between levels matters.
    pub level: u32,
    /// Text content of the heading.
    pub text: String,
    /// Stable structural identity, used as the store key.
    pub path: String,
}

impl Heading {
    /// Create a heading node.
    pub fn new(level: u32, text: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            path: path.into(),
        }
    }
}

/// Source of heading nodes, implemented by the document layer.
///
/// Given a selector, returns the matching nodes in document order. Query
/// evaluation itself (XPath, CSS, whatever the host document model speaks)
/// lives outside this crate.
pub trait HeadingSource {
    /// Return the headings matching `selector`, in document order.
    fn query(&self, selector: &str) -> Vec<Heading>;
}

/// A render-time node wrapper that can carry outline annotations.
///
/// The renderer hands frames to [`Outline::decorate_frame`]; decorated
/// frames expose the outline id and outline-parent id that the object
/// graph serializer uses to correlate render structure with bookmark
/// entries.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    path: String,
    outline_id: Option<String>,
    outline_parent_id: Option<String>,
}

impl Frame {
    /// Wrap the node with the given structural path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            outline_id: None,
            outline_parent_id: None,
        }
    }

    /// Structural path of the wrapped node.
    pub fn node_path(&self) -> &str {
        &self.path
    }

    /// Outline id, if the node is part of the outline.
    pub fn outline_id(&self) -> Option<&str> {
        self.outline_id.as_deref()
    }

    /// Outline id of the node's outline parent, if it has one.
    pub fn outline_parent_id(&self) -> Option<&str> {
        self.outline_parent_id.as_deref()
    }
}

/// The outline tree: a mapping from node identity to parent identity.
///
/// Populated once per document pass, read thereafter. Root nodes map to
/// `None`.
#[derive(Debug, Default)]
pub struct Outline {
    /// node path -> parent path (None for roots), in document order.
    parents: IndexMap<String, Option<String>>,
}

impl Outline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an outline according to the configured selector.
    ///
    /// An absent or empty selector disables extraction and yields an empty
    /// outline, which is a valid terminal state, not an error.
    pub fn from_source(options: &Options, source: &dyn HeadingSource) -> Self {
        let mut outline = Self::new();
        if let Some(selector) = options.outline_selector() {
            let headings = source.query(selector);
            log::debug!("outline selector {:?} matched {} headings", selector, headings.len());
            outline.add_headings(&headings);
        }
        outline
    }

    /// Add the headings, using their levels to build the structure.
    ///
    /// Maintains an active frontier: a stack of `(level, path)` pairs holding
    /// the currently open ancestor at each level, strictly increasing by
    /// level from bottom to top. Each incoming heading evicts frontier
    /// entries at its own level or deeper; whatever remains on top is its
    /// parent.
    pub fn add_headings(&mut self, headings: &[Heading]) {
        let mut frontier: Vec<(u32, &str)> = Vec::new();
        for heading in headings {
            while frontier.last().is_some_and(|&(level, _)| level >= heading.level) {
                frontier.pop();
            }
            let parent = frontier.last().map(|&(_, path)| path);
            self.add(&heading.path, parent);
            frontier.push((heading.level, heading.path.as_str()));
        }
    }

    /// Add a node to the outline tree under the given parent.
    ///
    /// Unconditional upsert: re-adding a path replaces its parent.
    pub fn add(&mut self, path: &str, parent: Option<&str>) {
        self.parents.insert(path.to_string(), parent.map(str::to_string));
    }

    /// Check whether the node is part of the outline.
    pub fn contains(&self, path: &str) -> bool {
        self.parents.contains_key(path)
    }

    /// Parent of the node in the outline tree, `None` for roots.
    ///
    /// Callers must check [`contains`](Self::contains) first: for a path
    /// that was never added this also returns `None`, indistinguishable
    /// from a root node.
    pub fn parent_of(&self, path: &str) -> Option<&str> {
        self.parents.get(path).and_then(|p| p.as_deref())
    }

    /// Total number of nodes in the outline forest.
    pub fn count(&self) -> usize {
        self.parents.len()
    }

    /// Annotate the frame with its outline id and outline-parent id.
    ///
    /// Frames whose node is not part of the outline are left untouched.
    pub fn decorate_frame(&self, frame: &mut Frame) {
        if self.contains(&frame.path) {
            frame.outline_id = Some(frame.path.clone());
            if let Some(parent) = self.parent_of(&frame.path) {
                frame.outline_parent_id = Some(parent.to_string());
            }
        }
    }
}
