//! PDF writing module for emitting the outline object graph.
//!
//! ## Architecture
//!
//! ```text
//! BookmarkEntry[]
//!     ↓
//! [build_outline_graph] (entries → linked indirect objects)
//!     ↓
//! [PdfWriter] (assembles header, catalog, xref, trailer)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! ```
//! use pdf_outline::writer::PdfWriter;
//!
//! let mut writer = PdfWriter::new();
//! writer.add_destination("intro", vec![]);
//! writer.add_outline_item("ch1", None, "Chapter 1", "intro");
//! let bytes = writer.finish()?;
//! # Ok::<(), pdf_outline::Error>(())
//! ```

mod object_serializer;
mod outline_builder;
mod pdf_writer;

pub use object_serializer::ObjectSerializer;
pub use outline_builder::{build_outline_graph, BookmarkEntry, OutlineGraph};
pub use pdf_writer::PdfWriter;
