//! The table orchestrator
//!
//! [`Table`] owns three cell grids (header levels, index levels, data
//! rows), a set of optional styling attributes, and an ordered list of
//! line overlays, and serializes the whole thing into one `#table(...)`
//! call. The grids are populated exactly once and never replaced;
//! individual cells stay reachable for in-place styling through the
//! `*_cell_mut` accessors.

use std::fmt;

use crate::render::{indent_lines, Renderable};
use crate::table::args::{render_arg, ArgValue};
use crate::table::cell::Cell;
use crate::table::flatten::{flatten_index, Direction};
use crate::table::line::TableLine;
use crate::table::source::TableSource;
use crate::utils::error::{Error, Result};

/// A Typst table under construction.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    header_data: Vec<Vec<Cell>>,
    index_data: Vec<Vec<Cell>>,
    row_data: Vec<Vec<Cell>>,
    columns: Option<ArgValue>,
    rows: Option<ArgValue>,
    stroke: Option<ArgValue>,
    align: Option<ArgValue>,
    fill: Option<ArgValue>,
    gutter: Option<ArgValue>,
    column_gutter: Option<ArgValue>,
    row_gutter: Option<ArgValue>,
    lines: Vec<TableLine>,
}

impl Table {
    /// Build a table from explicit cell grids.
    ///
    /// `header_data` holds one cell sequence per header level
    /// (outermost first), `index_data` one per index level, `row_data`
    /// one value cell per data column per row. The grids are frozen
    /// from this point on.
    pub fn new(
        header_data: Vec<Vec<Cell>>,
        index_data: Vec<Vec<Cell>>,
        row_data: Vec<Vec<Cell>>,
    ) -> Self {
        Table {
            header_data,
            index_data,
            row_data,
            ..Table::default()
        }
    }

    /// Build a table from a data source.
    ///
    /// The column and row indices are flattened into header and index
    /// cell grids, every data value becomes one cell, and `columns` is
    /// set to the total column count (data columns plus index levels).
    pub fn from_source(source: &impl TableSource) -> Result<Self> {
        let header_data = flatten_index(&source.column_index(), Direction::Cols);
        let index_data = flatten_index(&source.row_index(), Direction::Rows);
        let row_data: Vec<Vec<Cell>> = source
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(Cell::new).collect())
            .collect();

        let mut table = Table::new(header_data, index_data, row_data);
        let total = table.data_columns() + table.index_data.len();
        table.set_columns(total)?;

        Ok(table)
    }

    /// Header cell grid, one sequence per level (outermost first).
    pub fn header_data(&self) -> &[Vec<Cell>] {
        &self.header_data
    }

    /// Index cell grid, one sequence per level (outermost first).
    pub fn index_data(&self) -> &[Vec<Cell>] {
        &self.index_data
    }

    /// Data cell grid, one sequence per row.
    pub fn row_data(&self) -> &[Vec<Cell>] {
        &self.row_data
    }

    /// Line overlays in insertion order.
    pub fn lines(&self) -> &[TableLine] {
        &self.lines
    }

    /// Mutable access to a header cell for in-place styling.
    pub fn header_cell_mut(&mut self, level: usize, pos: usize) -> Option<&mut Cell> {
        self.header_data.get_mut(level)?.get_mut(pos)
    }

    /// Mutable access to an index cell for in-place styling.
    pub fn index_cell_mut(&mut self, level: usize, pos: usize) -> Option<&mut Cell> {
        self.index_data.get_mut(level)?.get_mut(pos)
    }

    /// Mutable access to a data cell for in-place styling.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.row_data.get_mut(row)?.get_mut(col)
    }

    /// Number of data columns, excluding index levels.
    ///
    /// With no data rows the count comes from the outermost header
    /// level instead, so a headers-only table still knows its width.
    fn data_columns(&self) -> usize {
        match self.row_data.first() {
            Some(row) => row.len(),
            None => self
                .header_data
                .first()
                .map_or(0, |level| level.iter().map(|cell| cell.colspan.max(1)).sum()),
        }
    }

    /// Set the `columns` sizing attribute.
    ///
    /// An integer or list must match the number of data columns plus
    /// index levels; a string (track size or formula) passes through.
    pub fn set_columns(&mut self, value: impl Into<ArgValue>) -> Result<()> {
        let value = value.into();
        let expected = self.data_columns() + self.index_data.len();
        match &value {
            ArgValue::Int(n) => {
                if *n < 0 || *n as usize != expected {
                    return Err(Error::attribute(
                        "number of columns must match the number of table columns plus index levels",
                    ));
                }
            }
            ArgValue::List(items) => {
                if items.len() != expected {
                    return Err(Error::attribute(
                        "columns list length must match the number of table columns plus index levels",
                    ));
                }
            }
            ArgValue::Str(_) => {}
            other => {
                return Err(Error::attribute(format!(
                    "columns must be an integer, string, or list of strings, got {}",
                    other.shape()
                )));
            }
        }
        self.columns = Some(value);
        Ok(())
    }

    /// Set the `rows` sizing attribute.
    ///
    /// An integer or list must match the number of data rows plus
    /// header levels; a string passes through.
    pub fn set_rows(&mut self, value: impl Into<ArgValue>) -> Result<()> {
        let value = value.into();
        let expected = self.row_data.len() + self.header_data.len();
        match &value {
            ArgValue::Int(n) => {
                if *n < 0 || *n as usize != expected {
                    return Err(Error::attribute(
                        "number of rows must match the number of table rows plus header levels",
                    ));
                }
            }
            ArgValue::List(items) => {
                if items.len() != expected {
                    return Err(Error::attribute(
                        "rows list length must match the number of table rows plus header levels",
                    ));
                }
            }
            ArgValue::Str(_) => {}
            other => {
                return Err(Error::attribute(format!(
                    "rows must be an integer, string, or list of strings, got {}",
                    other.shape()
                )));
            }
        }
        self.rows = Some(value);
        Ok(())
    }

    /// Set the table-wide stroke: scalar, per-edge list, or named-edge
    /// mapping.
    pub fn set_stroke(&mut self, value: impl Into<ArgValue>) -> Result<()> {
        let value = value.into();
        match &value {
            ArgValue::Str(_) | ArgValue::List(_) | ArgValue::Map(_) => {}
            other => {
                return Err(Error::attribute(format!(
                    "stroke must be a string, list of strings, or mapping, got {}",
                    other.shape()
                )));
            }
        }
        self.stroke = Some(value);
        Ok(())
    }

    /// Set the table-wide alignment: scalar or per-column list.
    pub fn set_align(&mut self, value: impl Into<ArgValue>) -> Result<()> {
        self.align = Some(scalar_or_list("align", value.into())?);
        Ok(())
    }

    /// Set the table-wide fill: scalar or per-column list.
    pub fn set_fill(&mut self, value: impl Into<ArgValue>) -> Result<()> {
        self.fill = Some(scalar_or_list("fill", value.into())?);
        Ok(())
    }

    /// Set the gutter between all tracks.
    pub fn set_gutter(&mut self, value: impl Into<ArgValue>) -> Result<()> {
        self.gutter = Some(gutter_value("gutter", value.into())?);
        Ok(())
    }

    /// Set the gutter between columns.
    pub fn set_column_gutter(&mut self, value: impl Into<ArgValue>) -> Result<()> {
        self.column_gutter = Some(gutter_value("column-gutter", value.into())?);
        Ok(())
    }

    /// Set the gutter between rows.
    pub fn set_row_gutter(&mut self, value: impl Into<ArgValue>) -> Result<()> {
        self.row_gutter = Some(gutter_value("row-gutter", value.into())?);
        Ok(())
    }

    /// Add a horizontal line at row boundary `y`.
    pub fn add_hline(&mut self, y: usize) {
        self.lines.push(TableLine::horizontal(y));
    }

    /// Add a vertical line at column boundary `x`.
    pub fn add_vline(&mut self, x: usize) {
        self.lines.push(TableLine::vertical(x));
    }

    /// Add a fully configured line overlay.
    pub fn add_line(&mut self, line: TableLine) {
        self.lines.push(line);
    }

    /// Styling attributes in their fixed render order.
    fn args(&self) -> [(&'static str, &Option<ArgValue>); 8] {
        [
            ("columns", &self.columns),
            ("rows", &self.rows),
            ("stroke", &self.stroke),
            ("align", &self.align),
            ("fill", &self.fill),
            ("gutter", &self.gutter),
            ("column-gutter", &self.column_gutter),
            ("row-gutter", &self.row_gutter),
        ]
    }

    fn render_args(&self) -> String {
        let rendered: Vec<String> = self
            .args()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .as_ref()
                    .map(|v| format!("{}: {}", name, render_arg(v)))
            })
            .collect();
        if rendered.is_empty() {
            String::new()
        } else {
            rendered.join(",\n") + ",\n"
        }
    }

    fn render_lines(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let rendered: Vec<String> = self.lines.iter().map(|line| line.render()).collect();
        rendered.join(",\n") + ",\n"
    }

    /// Render the header block: the index-corner placeholder spanning
    /// all header rows and index columns, then every header cell in
    /// level-major order, abutting.
    fn render_header(&self) -> String {
        let corner = Cell::empty()
            .with_rowspan(self.header_data.len().max(1))
            .with_colspan(self.index_data.len().max(1));
        let mut header = String::from("table.header");
        header.push_str(&corner.render());
        for cell in self.header_data.iter().flatten() {
            header.push_str(&cell.render());
        }
        header.push_str(",\n");

        header
    }

    /// Render the data rows, interleaving index cells.
    ///
    /// A spanning index cell is emitted once and then suppressed for
    /// the remaining rows it covers, tracked by one remaining-span
    /// counter per level.
    fn render_body(&self) -> String {
        let nlevels = self.index_data.len();
        let mut remaining = vec![0usize; nlevels];
        let mut positions = vec![0usize; nlevels];
        let mut body = String::new();
        for row in &self.row_data {
            for level in 0..nlevels {
                if remaining[level] == 0 {
                    let Some(cell) = self.index_data[level].get(positions[level]) else {
                        // Placeholder level from an empty index
                        continue;
                    };
                    body.push_str(&cell.render());
                    body.push_str(", ");
                    positions[level] += 1;
                    remaining[level] = cell.rowspan.max(1);
                }
                remaining[level] -= 1;
            }
            let cells: Vec<String> = row.iter().map(|cell| cell.render()).collect();
            body.push_str(&cells.join(", "));
            body.push_str(",\n");
        }

        body
    }
}

impl Renderable for Table {
    /// Render the full `#table(...)` call.
    ///
    /// Pure read: repeated calls on an unmodified table yield identical
    /// text. Inner lines are indented by two columns relative to the
    /// opening line.
    fn render(&self) -> String {
        let mut inner = self.render_args()
            + &self.render_lines()
            + &self.render_header()
            + &self.render_body();
        // Trailing separator is elided on the final element
        inner.truncate(inner.len().saturating_sub(2));

        format!("#table(\n  {}\n)", indent_lines(&inner))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn scalar_or_list(name: &str, value: ArgValue) -> Result<ArgValue> {
    match &value {
        ArgValue::Str(_) | ArgValue::List(_) => Ok(value),
        other => Err(Error::attribute(format!(
            "{} must be a string or list of strings, got {}",
            name,
            other.shape()
        ))),
    }
}

fn gutter_value(name: &str, value: ArgValue) -> Result<ArgValue> {
    match &value {
        ArgValue::Int(_) | ArgValue::Float(_) | ArgValue::Str(_) | ArgValue::List(_) => Ok(value),
        other => Err(Error::attribute(format!(
            "{} must be a number, string, or list of strings, got {}",
            name,
            other.shape()
        ))),
    }
}
