//! # pdf_outline
//!
//! Builds navigable PDF bookmark hierarchies from heading sequences and
//! serializes them into PDF's native outline object graph.
//!
//! Two independent passes:
//!
//! - **Tree building**: a flat, level-tagged heading sequence becomes a
//!   parent-per-node relation ([`Outline`]), consumed at render time via
//!   [`Outline::decorate_frame`].
//! - **Graph emission**: an ordered list of [`writer::BookmarkEntry`] values
//!   becomes linked indirect objects (Parent/First/Last/Prev/Next pointers
//!   and signed aggregate Counts) plus a `/Type /Outlines` root container,
//!   wired into the catalog and covered by the cross-reference table.
//!
//! Document parsing, page content and resource embedding are external
//! collaborators; this crate only consumes heading nodes and emits outline
//! objects.
//!
//! ## Quick start
//!
//! ```
//! use pdf_outline::writer::PdfWriter;
//!
//! let mut writer = PdfWriter::new();
//! writer.add_destination("dest_A", vec![]);
//! writer.add_outline_item("A", None, "title_A", "dest_A");
//! writer.add_destination("dest_b", vec![]);
//! writer.add_outline_item("b", Some("A"), "title_b", "dest_b");
//! let pdf_bytes = writer.finish()?;
//! assert!(pdf_bytes.starts_with(b"%PDF-"));
//! # Ok::<(), pdf_outline::Error>(())
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// PDF object model
pub mod object;

// Outline tree construction
pub mod outline;

// Outline object-graph emission
pub mod writer;

// Re-exports
pub use config::Options;
pub use error::{Error, Result};
pub use object::{Object, ObjectIdAllocator, ObjectRef};
pub use outline::{Frame, Heading, HeadingSource, Outline};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
