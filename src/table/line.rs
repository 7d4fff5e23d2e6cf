//! Manually placed separator lines
//!
//! Line overlays are independent of cell styling: each one renders as
//! its own `table.hline(...)` or `table.vline(...)` call, and the table
//! emits them in the exact order they were added.

use crate::render::Renderable;
use crate::table::args::{render_arg, ArgValue};

/// Axis of a separator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Placement of a line relative to the row or column at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinePosition {
    Start,
    End,
}

impl LinePosition {
    fn as_str(&self) -> &'static str {
        match self {
            LinePosition::Start => "start",
            LinePosition::End => "end",
        }
    }
}

/// A horizontal or vertical separator line directive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableLine {
    pub pos: usize,
    pub orientation: Orientation,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub stroke: Option<ArgValue>,
    pub position: Option<LinePosition>,
}

impl TableLine {
    /// A horizontal line at row boundary `y`.
    pub fn horizontal(y: usize) -> Self {
        TableLine::new(y, Orientation::Horizontal)
    }

    /// A vertical line at column boundary `x`.
    pub fn vertical(x: usize) -> Self {
        TableLine::new(x, Orientation::Vertical)
    }

    fn new(pos: usize, orientation: Orientation) -> Self {
        TableLine {
            pos,
            orientation,
            start: None,
            end: None,
            stroke: None,
            position: None,
        }
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: usize) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<ArgValue>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_position(mut self, position: LinePosition) -> Self {
        self.position = Some(position);
        self
    }
}

impl Renderable for TableLine {
    /// Render as a single `table.hline(...)` / `table.vline(...)` call.
    fn render(&self) -> String {
        let (name, coord) = match self.orientation {
            Orientation::Horizontal => ("table.hline", "y"),
            Orientation::Vertical => ("table.vline", "x"),
        };

        let mut args = vec![format!("{}: {}", coord, self.pos)];
        if let Some(start) = self.start {
            args.push(format!("start: {}", start));
        }
        if let Some(end) = self.end {
            args.push(format!("end: {}", end));
        }
        if let Some(stroke) = &self.stroke {
            args.push(format!("stroke: {}", render_arg(stroke)));
        }
        if let Some(position) = self.position {
            args.push(format!("position: {}", position.as_str()));
        }

        format!("{}({})", name, args.join(", "))
    }
}
