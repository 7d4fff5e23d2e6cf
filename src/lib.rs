//! # typsmith
//!
//! Programmatic Typst document builder written in Rust.
//!
//! ## Features
//!
//! - **Table Rendering**: dataframe-style tables with multi-level
//!   row/column headers, merged spanning cells, per-cell styling, and
//!   manual separator lines
//! - **Element Builders**: headings, bullet and numbered lists,
//!   figures, images
//! - **Document Assembly**: top-level documents with import
//!   aggregation
//! - **Exact Output**: byte-stable argument ordering, indentation, and
//!   cell placement, compatible with the Typst parser
//!
//! ## Usage Examples
//!
//! ### Table from a data source
//!
//! ```rust
//! use typsmith::{Frame, Index, Renderable, Table};
//!
//! let frame = Frame::new(
//!     Index::flat(["A", "B", "C"]),
//!     Index::flat([0, 1, 2]),
//!     vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]],
//! )
//! .unwrap();
//!
//! let mut table = Table::from_source(&frame).unwrap();
//! table.set_align("center").unwrap();
//! table.cell_mut(0, 0).unwrap().fill = Some("yellow".into());
//!
//! let source = table.render();
//! assert!(source.starts_with("#table(\n  columns: 4,"));
//! assert!(source.contains("table.header[][A][B][C]"));
//! ```
//!
//! ### Full document assembly
//!
//! ```rust
//! use typsmith::{Document, Heading, Itemize, Renderable};
//!
//! let heading = Heading::new("Results").with_level(1).unwrap();
//! let list = Itemize::from_items(["First finding", "Second finding"]);
//!
//! let mut doc = Document::new(format!("{}\n\n{}", heading.render(), list.render()));
//! doc.add_import("template.typ", ["*"]).unwrap();
//!
//! assert_eq!(
//!     doc.render(),
//!     "#import \"template.typ\": *\n\n= Results\n\n- First finding\n- Second finding"
//! );
//! ```

/// Document element builders
pub mod elements;

/// Rendering contract shared by all elements
pub mod render;

/// Table building and rendering
pub mod table;

/// Utility modules
pub mod utils;

// Re-export the element builders
pub use elements::{
    Document, Enumerate, Figure, Heading, Image, ImageFit, ImageFormat, Import, Itemize, ListItem,
};

// Re-export the table subsystem
pub use table::{
    flatten_index, render_arg, render_mapping, render_sequence, ArgValue, Cell, Direction, Frame,
    Index, LinePosition, MultiIndex, Orientation, Table, TableLine, TableSource,
};

// Re-export the rendering contract and error types
pub use render::Renderable;
pub use utils::error::{Error, Result};
