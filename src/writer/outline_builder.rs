//! Bookmark object-graph construction for PDF generation.
//!
//! Turns an ordered, flat list of bookmark entries into the linked indirect
//! objects a viewer navigates: one object per entry wired with
//! Parent/Prev/Next/First/Last references and signed aggregate Counts, plus
//! the `/Type /Outlines` root container, per PDF spec Section 12.3.3
//! (Document Outline).

use crate::error::{Error, Result};
use crate::object::{Object, ObjectIdAllocator, ObjectRef};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A single bookmark entry, in flat parent-id form.
///
/// Input order defines sibling order within a parent group. The parent may
/// be defined before or after its children; only the full entry list has to
/// resolve.
#[derive(Debug, Clone)]
pub struct BookmarkEntry {
    /// Stable id of this entry, referenced by children as `parent_id`.
    pub id: String,
    /// Id of the parent entry, `None` for top-level entries.
    pub parent_id: Option<String>,
    /// Display title.
    pub title: String,
    /// Name of the destination this entry jumps to.
    pub destination: String,
    /// Whether the entry's children are initially expanded.
    ///
    /// Controls the sign of the Count field. Defaults to closed.
    pub open: bool,
}

impl BookmarkEntry {
    /// Create a closed-by-default bookmark entry.
    pub fn new(
        id: impl Into<String>,
        parent_id: Option<&str>,
        title: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.map(str::to_string),
            title: title.into(),
            destination: destination.into(),
            open: false,
        }
    }

    /// Set the initial open (expanded) state.
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

/// The built outline object graph, ready for emission.
#[derive(Debug)]
pub struct OutlineGraph {
    /// Reference to the root container object (the catalog's Outlines value).
    pub root_ref: ObjectRef,
    /// All outline objects in emission order, root container first.
    pub objects: Vec<(ObjectRef, Object)>,
}

/// Build the outline object graph from an ordered list of bookmark entries.
///
/// `destinations` resolves each entry's destination name to the indirect
/// object holding it. Object ids are drawn from `ids` in emission order:
/// the root container first, then one id per entry in input order.
///
/// Returns `Ok(None)` for an empty entry list: no objects, no root
/// container.
///
/// # Errors
///
/// [`Error::UnknownOutlineParent`] if an entry names a parent id that is not
/// among the entries, [`Error::CircularOutline`] if parent links form a
/// cycle, [`Error::UnknownDestination`] if a destination name is
/// unregistered. All three abort the build; dropping the offending entry
/// silently would corrupt the Count of every ancestor.
pub fn build_outline_graph(
    entries: &[BookmarkEntry],
    destinations: &IndexMap<String, ObjectRef>,
    ids: &mut ObjectIdAllocator,
) -> Result<Option<OutlineGraph>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let index_by_id: HashMap<&str, usize> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.id.as_str(), index))
        .collect();

    // Referential integrity first: every parent must resolve.
    for entry in entries {
        if let Some(parent) = entry.parent_id.as_deref() {
            if !index_by_id.contains_key(parent) {
                return Err(Error::UnknownOutlineParent {
                    id: entry.id.clone(),
                    parent: parent.to_string(),
                });
            }
        }
    }

    // Group by parent, preserving input order within each group.
    let mut children: IndexMap<Option<usize>, Vec<usize>> = IndexMap::new();
    for (index, entry) in entries.iter().enumerate() {
        let parent = entry.parent_id.as_deref().map(|p| index_by_id[p]);
        children.entry(parent).or_default().push(index);
    }
    let roots: Vec<usize> = children.get(&None).cloned().unwrap_or_default();

    // Descendant totals, post-order from the roots. Entries never reached
    // from a root sit on a parent cycle.
    let mut totals = vec![0i64; entries.len()];
    let mut visited = vec![false; entries.len()];
    for &root in &roots {
        total_descendants(root, &children, &mut totals, &mut visited);
    }
    if let Some(unreached) = visited.iter().position(|&v| !v) {
        return Err(Error::CircularOutline {
            id: entries[unreached].id.clone(),
        });
    }

    // Sibling links from each group's input order.
    let mut prev: Vec<Option<usize>> = vec![None; entries.len()];
    let mut next: Vec<Option<usize>> = vec![None; entries.len()];
    for siblings in children.values() {
        for pair in siblings.windows(2) {
            next[pair[0]] = Some(pair[1]);
            prev[pair[1]] = Some(pair[0]);
        }
    }

    // Ids in emission order: root container, then entries in input order.
    let root_ref = ids.alloc_ref();
    let entry_refs: Vec<ObjectRef> = entries.iter().map(|_| ids.alloc_ref()).collect();

    log::debug!(
        "outline graph: {} entries in {} sibling groups, root {}",
        entries.len(),
        children.len(),
        root_ref
    );

    let mut objects: Vec<(ObjectRef, Object)> = Vec::with_capacity(entries.len() + 1);

    let mut root_dict = IndexMap::new();
    root_dict.insert("Type".to_string(), Object::name("Outlines"));
    root_dict.insert(
        "First".to_string(),
        Object::Reference(entry_refs[roots[0]]),
    );
    root_dict.insert(
        "Last".to_string(),
        Object::Reference(entry_refs[roots[roots.len() - 1]]),
    );
    // Top-level entries are always visible: the root Count is unsigned.
    root_dict.insert("Count".to_string(), Object::Integer(roots.len() as i64));
    objects.push((root_ref, Object::Dictionary(root_dict)));

    for (index, entry) in entries.iter().enumerate() {
        let dest_ref = destinations.get(&entry.destination).copied().ok_or_else(|| {
            Error::UnknownDestination {
                id: entry.id.clone(),
                destination: entry.destination.clone(),
            }
        })?;
        let parent_ref = match entry.parent_id.as_deref() {
            Some(parent) => entry_refs[index_by_id[parent]],
            None => root_ref,
        };

        let mut dict = IndexMap::new();
        dict.insert("Title".to_string(), Object::String(entry.title.as_bytes().to_vec()));
        dict.insert("Dest".to_string(), Object::Reference(dest_ref));
        dict.insert("Parent".to_string(), Object::Reference(parent_ref));
        if let Some(p) = prev[index] {
            dict.insert("Prev".to_string(), Object::Reference(entry_refs[p]));
        }
        if let Some(n) = next[index] {
            dict.insert("Next".to_string(), Object::Reference(entry_refs[n]));
        }
        if let Some(kids) = children.get(&Some(index)) {
            dict.insert("First".to_string(), Object::Reference(entry_refs[kids[0]]));
            dict.insert(
                "Last".to_string(),
                Object::Reference(entry_refs[kids[kids.len() - 1]]),
            );
            let count = if entry.open { totals[index] } else { -totals[index] };
            dict.insert("Count".to_string(), Object::Integer(count));
        }
        objects.push((entry_refs[index], Object::Dictionary(dict)));
    }

    Ok(Some(OutlineGraph { root_ref, objects }))
}

/// Total number of descendants of `index`, filling `totals` post-order.
fn total_descendants(
    index: usize,
    children: &IndexMap<Option<usize>, Vec<usize>>,
    totals: &mut [i64],
    visited: &mut [bool],
) -> i64 {
    visited[index] = true;
    let mut total = 0;
    if let Some(kids) = children.get(&Some(index)) {
        for &kid in kids {
            total += 1 + total_descendants(kid, children, totals, visited);
        }
    }
    totals[index] = total;
    total
}
