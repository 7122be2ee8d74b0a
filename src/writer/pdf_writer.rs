//! PDF document writer.
//!
//! Assembles the output byte stream around the outline object graph: header,
//! catalog, named destination objects, outline objects, xref table and
//! trailer. Page content and resources come from an external writer; this
//! one emits only what outline navigation needs, plus a stub page tree so
//! the catalog is well-formed on its own.

use super::object_serializer::ObjectSerializer;
use super::outline_builder::{build_outline_graph, BookmarkEntry};
use crate::error::Result;
use crate::object::{Object, ObjectIdAllocator, ObjectRef};
use indexmap::IndexMap;
use std::io::Write;

/// PDF version written into the header.
const PDF_VERSION: &str = "1.7";

/// PDF document writer for outline-bearing documents.
///
/// Destinations and outline items can be registered in any order; objects
/// are allocated and emitted in one pass at [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct PdfWriter {
    /// Named destinations: name -> destination value (usually an array).
    destinations: IndexMap<String, Vec<Object>>,
    /// Bookmark entries in authoring order.
    entries: Vec<BookmarkEntry>,
}

impl PdfWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named destination.
    ///
    /// `params` is the destination value emitted as an array object, e.g.
    /// a page reference followed by a fit mode. Re-registering a name
    /// replaces its value; objects are only allocated at finish time.
    pub fn add_destination(&mut self, name: impl Into<String>, params: Vec<Object>) -> &mut Self {
        self.destinations.insert(name.into(), params);
        self
    }

    /// Append a closed-by-default outline item.
    ///
    /// The destination and the parent id may be registered before or after
    /// this call; both are resolved at finish time.
    pub fn add_outline_item(
        &mut self,
        id: impl Into<String>,
        parent_id: Option<&str>,
        title: impl Into<String>,
        destination: impl Into<String>,
    ) -> &mut Self {
        self.add_outline_entry(BookmarkEntry::new(id, parent_id, title, destination))
    }

    /// Append a fully specified outline entry.
    pub fn add_outline_entry(&mut self, entry: BookmarkEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Number of outline entries added so far.
    pub fn outline_len(&self) -> usize {
        self.entries.len()
    }

    /// Build the complete document byte stream.
    ///
    /// Object ids are allocated strictly in emission order from one shared
    /// counter: catalog, page tree stub, destinations in registration
    /// order, then the outline graph (root container first, entries in
    /// input order). The xref section records the exact byte offset of
    /// every object definition.
    pub fn finish(self) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::new();
        let mut ids = ObjectIdAllocator::new();

        let catalog_ref = ids.alloc_ref();
        let pages_ref = ids.alloc_ref();

        // Destination objects, in registration order.
        let mut dest_refs: IndexMap<String, ObjectRef> = IndexMap::new();
        let mut dest_objects: Vec<(ObjectRef, Object)> = Vec::with_capacity(self.destinations.len());
        for (name, params) in self.destinations {
            let dest_ref = ids.alloc_ref();
            dest_refs.insert(name, dest_ref);
            dest_objects.push((dest_ref, Object::Array(params)));
        }

        let outline = build_outline_graph(&self.entries, &dest_refs, &mut ids)?;

        let mut catalog = IndexMap::new();
        catalog.insert("Type".to_string(), Object::name("Catalog"));
        catalog.insert("Pages".to_string(), Object::Reference(pages_ref));
        if let Some(graph) = &outline {
            catalog.insert("Outlines".to_string(), Object::Reference(graph.root_ref));
        }

        // Stub page tree; the real page writer is an external collaborator.
        let mut pages = IndexMap::new();
        pages.insert("Type".to_string(), Object::name("Pages"));
        pages.insert("Kids".to_string(), Object::Array(Vec::new()));
        pages.insert("Count".to_string(), Object::Integer(0));

        let mut output = Vec::new();
        let mut xref_offsets: Vec<(u32, usize)> = Vec::new();

        writeln!(output, "%PDF-{}", PDF_VERSION)?;
        // Binary marker, so transports treat the file as binary.
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let mut emit = |output: &mut Vec<u8>, obj_ref: ObjectRef, obj: &Object| {
            xref_offsets.push((obj_ref.id, output.len()));
            output.extend_from_slice(&serializer.serialize_indirect(obj_ref, obj));
        };

        emit(&mut output, catalog_ref, &Object::Dictionary(catalog));
        emit(&mut output, pages_ref, &Object::Dictionary(pages));
        for (dest_ref, obj) in &dest_objects {
            emit(&mut output, *dest_ref, obj);
        }
        if let Some(graph) = &outline {
            for (obj_ref, obj) in &graph.objects {
                emit(&mut output, *obj_ref, obj);
            }
        }

        log::debug!("emitted {} objects, xref at {}", ids.allocated(), output.len());

        // Xref section: one entry per allocated id, plus the free object 0.
        let xref_start = output.len();
        let size = ids.allocated() as i64 + 1;
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", size)?;
        writeln!(output, "0000000000 65535 f ")?;
        xref_offsets.sort_by_key(|&(id, _)| id);
        for (_, offset) in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let mut trailer = IndexMap::new();
        trailer.insert("Size".to_string(), Object::Integer(size));
        trailer.insert("Root".to_string(), Object::Reference(catalog_ref));

        writeln!(output, "trailer")?;
        output.extend_from_slice(&serializer.serialize(&Object::Dictionary(trailer)));
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        writeln!(output, "%%EOF")?;

        Ok(output)
    }

    /// Build the document and write it to a file.
    pub fn save(self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.finish()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
