//! Table building and rendering
//!
//! The core subsystem of the crate: turn a two-dimensional, possibly
//! hierarchically-indexed data set into a single well-formed
//! `#table(...)` call with exact whitespace and argument ordering.
//!
//! # Architecture
//!
//! ```text
//! TableSource -> Index Flattening -> Cell Grids -> Typst Generation
//! ```
//!
//! Indices flatten into per-level cell runs ([`flatten_index`]), cells
//! render themselves ([`Cell`]), styling arguments render through one
//! literal renderer ([`render_arg`]), and [`Table`] composes the parts
//! into the final call.
//!
//! # Example
//!
//! ```
//! use typsmith::{Frame, Index, Renderable, Table};
//!
//! let frame = Frame::new(
//!     Index::flat(["A", "B"]),
//!     Index::flat([0, 1]),
//!     vec![vec![1, 2], vec![3, 4]],
//! )
//! .unwrap();
//! let table = Table::from_source(&frame).unwrap();
//! assert!(table.render().starts_with("#table(\n  columns: 3,"));
//! ```

mod args;
mod builder;
mod cell;
mod flatten;
mod line;
mod source;


// Re-export public API
pub use args::{render_arg, render_mapping, render_sequence, ArgValue};
pub use builder::Table;
pub use cell::Cell;
pub use flatten::{flatten_index, Direction, Index, MultiIndex};
pub use line::{LinePosition, Orientation, TableLine};
pub use source::{Frame, TableSource};
