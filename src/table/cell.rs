//! Table cell with span and styling attributes
//!
//! Cells are usually synthesized when a table is built from a data
//! source; the caller then styles individual cells in place. A cell
//! only emits the `table.cell(...)` wrapper when it actually spans or
//! carries a style, so unstyled 1x1 cells stay as bare content blocks.

use crate::render::Renderable;
use crate::table::args::{render_arg, ArgValue};

/// A single table cell: content plus span and appearance attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Rendered cell content; `None` renders as an empty block
    pub value: Option<String>,
    /// Number of rows this cell spans (>= 1)
    pub rowspan: usize,
    /// Number of columns this cell spans (>= 1)
    pub colspan: usize,
    /// Background fill (color or formula)
    pub fill: Option<String>,
    /// Content alignment (keyword or formula)
    pub align: Option<String>,
    /// Stroke: scalar, per-edge list, or named-edge mapping
    pub stroke: Option<ArgValue>,
}

impl Cell {
    /// Create a cell from any renderable value.
    ///
    /// The value is rendered to Typst source once, here; nested
    /// elements (lists, sub-tables) are supported through their own
    /// [`Renderable`] implementations.
    pub fn new(value: impl Renderable) -> Self {
        Cell {
            value: Some(value.render()),
            ..Cell::empty()
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Cell {
            value: None,
            rowspan: 1,
            colspan: 1,
            fill: None,
            align: None,
            stroke: None,
        }
    }

    pub fn with_rowspan(mut self, rowspan: usize) -> Self {
        self.rowspan = rowspan;
        self
    }

    pub fn with_colspan(mut self, colspan: usize) -> Self {
        self.colspan = colspan;
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<ArgValue>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Whether the cell renders as a bare content block, without the
    /// `table.cell` wrapper.
    fn is_plain(&self) -> bool {
        self.rowspan <= 1
            && self.colspan <= 1
            && self.fill.is_none()
            && self.align.is_none()
            && self.stroke.is_none()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}

impl Renderable for Cell {
    /// Render the cell to a bracketed content block.
    ///
    /// The `table.cell` call is itself wrapped in a content block to
    /// fit the surrounding table syntax:
    /// `[#table.cell(rowspan: 2, colspan: 3, fill: red)[Value]]`.
    fn render(&self) -> String {
        let content = match &self.value {
            Some(value) => format!("[{}]", value),
            None => "[]".to_string(),
        };

        if self.is_plain() {
            return content;
        }

        let mut args = Vec::new();
        if self.rowspan > 1 {
            args.push(format!("rowspan: {}", self.rowspan));
        }
        if self.colspan > 1 {
            args.push(format!("colspan: {}", self.colspan));
        }
        if let Some(fill) = &self.fill {
            args.push(format!("fill: {}", fill));
        }
        if let Some(align) = &self.align {
            args.push(format!("align: {}", align));
        }
        if let Some(stroke) = &self.stroke {
            args.push(format!("stroke: {}", render_arg(stroke)));
        }

        format!("[#table.cell({}){}]", args.join(", "), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_cell() {
        assert_eq!(Cell::new("Value").render(), "[Value]");
        assert_eq!(Cell::new(42).render(), "[42]");
    }

    #[test]
    fn test_empty_cell() {
        assert_eq!(Cell::empty().render(), "[]");
    }

    #[test]
    fn test_span_of_one_stays_undecorated() {
        let cell = Cell::new("A").with_rowspan(1).with_colspan(1);
        assert_eq!(cell.render(), "[A]");
    }

    #[test]
    fn test_fully_styled_cell() {
        let cell = Cell::new("Value")
            .with_rowspan(2)
            .with_colspan(3)
            .with_fill("red")
            .with_align("center")
            .with_stroke("black");
        assert_eq!(
            cell.render(),
            "[#table.cell(rowspan: 2, colspan: 3, fill: red, align: center, stroke: black)[Value]]"
        );
    }

    #[test]
    fn test_styled_empty_cell() {
        let cell = Cell::empty().with_rowspan(2);
        assert_eq!(cell.render(), "[#table.cell(rowspan: 2)[]]");
    }

    #[test]
    fn test_stroke_list_and_mapping() {
        let cell = Cell::new("A").with_stroke(vec!["3pt", "2pt", "1pt"]);
        assert_eq!(
            cell.render(),
            "[#table.cell(stroke: (3pt, 2pt, 1pt))[A]]"
        );

        let cell = Cell::new("A").with_stroke([("top", "1pt"), ("bottom", "2pt")]);
        assert_eq!(
            cell.render(),
            "[#table.cell(stroke: (top: 1pt, bottom: 2pt))[A]]"
        );
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Cell::new("A"), Cell::new("A"));
        assert_ne!(Cell::new("A"), Cell::new("A").with_colspan(2));
        assert_ne!(Cell::new("A"), Cell::new("A").with_fill("red"));
    }

    #[test]
    fn test_nested_renderable_value() {
        let inner = Cell::new("nested");
        let outer = Cell::new(inner);
        assert_eq!(outer.render(), "[[nested]]");
    }
}
