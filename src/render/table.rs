//! Layout of tables.
//!
//! Cells are written like any other canvas while the table is open.  Once
//! the table closes, [`Table::get_text`] runs two passes over the collected
//! cells: first every row is given the height of its tallest cell, then every
//! column the width of its widest cell.  Cells are padded, never truncated.

use super::canvas::Canvas;
use super::strings;
use super::{HorizontalAlignment, VerticalAlignment};

/// The default text between adjacent cells of a row.
pub const DEFAULT_CELL_SEPARATOR: &str = "  ";

/// One table cell: a canvas plus its alignment.
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    canvas: Canvas,
    align: HorizontalAlignment,
    valign: VerticalAlignment,
    width: Option<usize>,
    line_widths: Vec<usize>,
    vertical_padding: usize,
}

impl TableCell {
    /// An empty cell.
    pub fn new(align: HorizontalAlignment, valign: VerticalAlignment) -> Self {
        TableCell {
            canvas: Canvas::new(),
            align,
            valign,
            width: None,
            line_widths: Vec::new(),
            vertical_padding: 0,
        }
    }

    /// The canvas holding the cell's content.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable access to the cell's canvas.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Horizontal alignment.
    pub fn align(&self) -> HorizontalAlignment {
        self.align
    }

    /// Vertical alignment.
    pub fn valign(&self) -> VerticalAlignment {
        self.valign
    }

    /// Width of each line before horizontal padding was applied.
    pub fn line_widths(&self) -> &[usize] {
        &self.line_widths
    }

    /// Number of blank lines inserted above the content.
    pub fn vertical_padding(&self) -> usize {
        self.vertical_padding
    }

    /// The cell's lines.
    pub fn lines(&self) -> &[String] {
        self.canvas.blocks()
    }

    /// Number of lines; an empty cell still occupies one.
    pub fn height(&self) -> usize {
        self.canvas.blocks().len().max(1)
    }

    /// The assigned width, or otherwise the widest line.
    pub fn width(&self) -> usize {
        if let Some(width) = self.width {
            return width;
        }
        self.canvas
            .blocks()
            .iter()
            .flat_map(|block| strings::split_lines(block))
            .map(strings::width)
            .max()
            .unwrap_or(0)
    }

    /// Flush pending text and store the content as one entry per physical
    /// line.  Returns the resulting height.
    pub fn normalize_blocks(&mut self) -> usize {
        self.canvas.flush_inline();
        let blocks = self.canvas.blocks_mut();
        let mut normalized: Vec<String> = blocks
            .iter()
            .flat_map(|block| strings::split_lines(block))
            .map(String::from)
            .collect();
        if normalized.is_empty() {
            normalized.push(String::new());
        }
        *blocks = normalized;
        blocks.len()
    }

    /// Add blank lines to reach `height`, placed according to the vertical
    /// alignment.
    pub fn set_height(&mut self, height: usize) {
        let blocks = self.canvas.blocks_mut();
        let diff = height.saturating_sub(blocks.len());
        if diff == 0 {
            return;
        }
        let (prepend, append) = match self.valign {
            VerticalAlignment::Bottom => (diff, 0),
            VerticalAlignment::Middle => (diff / 2, (diff + 1) / 2),
            VerticalAlignment::Top => (0, diff),
        };
        self.vertical_padding = prepend;
        blocks.splice(0..0, std::iter::repeat(String::new()).take(prepend));
        blocks.extend(std::iter::repeat(String::new()).take(append));
    }

    /// Pad every line to `width` according to the horizontal alignment.
    pub fn set_width(&mut self, width: usize) {
        self.width = Some(width);
        let align = self.align;
        let blocks = self.canvas.blocks_mut();
        self.line_widths = blocks.iter().map(|line| strings::width(line)).collect();
        for line in blocks.iter_mut() {
            *line = match align {
                HorizontalAlignment::Left => strings::pad_right(line, width),
                HorizontalAlignment::Right => strings::pad_left(line, width),
                HorizontalAlignment::Center => strings::pad_center(line, width),
            };
        }
    }
}

/// A row of cells.
#[derive(Debug, Clone)]
pub struct TableRow {
    cells: Vec<TableCell>,
    separator: String,
}

impl Default for TableRow {
    fn default() -> Self {
        TableRow::new(DEFAULT_CELL_SEPARATOR)
    }
}

impl TableRow {
    /// An empty row whose cells are joined by `separator`.
    pub fn new(separator: &str) -> Self {
        TableRow {
            cells: Vec::new(),
            separator: separator.into(),
        }
    }

    /// The cells of the row.
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The text placed between cells.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Append a cell, returning its column index.
    pub fn push(&mut self, cell: TableCell) -> usize {
        self.cells.push(cell);
        self.cells.len() - 1
    }

    /// The cell in `column`, if present.
    pub fn cell_mut(&mut self, column: usize) -> Option<&mut TableCell> {
        self.cells.get_mut(column)
    }

    /// Width of the row including separators.
    pub fn width(&self) -> usize {
        if self.cells.is_empty() {
            return 0;
        }
        let separators = strings::width(&self.separator) * (self.cells.len() - 1);
        separators + self.cells.iter().map(TableCell::width).sum::<usize>()
    }

    /// The row's lines, each the cells' lines joined by the separator.
    pub fn text(&self) -> String {
        let height = match self.cells.iter().map(TableCell::height).max() {
            Some(height) => height,
            None => return String::new(),
        };
        let lines: Vec<String> = (0..height)
            .map(|i| {
                let parts: Vec<&str> = self
                    .cells
                    .iter()
                    .map(|cell| cell.lines().get(i).map_or("", String::as_str))
                    .collect();
                parts.join(self.separator.as_str())
            })
            .collect();
        lines.join("\n")
    }
}

/// A table under construction.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<TableRow>,
    separator: String,
}

impl Default for Table {
    fn default() -> Self {
        Table::new(DEFAULT_CELL_SEPARATOR)
    }
}

impl Table {
    /// An empty table whose rows use `separator` between cells.
    pub fn new(separator: &str) -> Self {
        Table {
            rows: Vec::new(),
            separator: separator.into(),
        }
    }

    /// The rows collected so far.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Start a new row.
    pub fn add_row(&mut self) {
        self.rows.push(TableRow::new(&self.separator));
    }

    /// Add a cell to the last row, creating the row if there is none yet.
    /// Returns the cell's `(row, column)` position.
    pub fn add_cell(&mut self, cell: TableCell) -> (usize, usize) {
        if self.rows.is_empty() {
            self.add_row();
        }
        let row = self.rows.len() - 1;
        let column = self.rows[row].push(cell);
        (row, column)
    }

    /// The cell at `(row, column)`, if present.
    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row)?.cell_mut(column)
    }

    fn set_row_heights(&mut self) {
        for row in &mut self.rows {
            let height = row
                .cells
                .iter_mut()
                .map(TableCell::normalize_blocks)
                .max()
                .unwrap_or(0);
            for cell in &mut row.cells {
                cell.set_height(height);
            }
        }
    }

    fn set_column_widths(&mut self) {
        let columns = self.rows.iter().map(TableRow::len).max().unwrap_or(0);
        for column in 0..columns {
            let width = self
                .rows
                .iter()
                .filter_map(|row| row.cells.get(column))
                .map(TableCell::width)
                .max()
                .unwrap_or(0);
            for cell in self
                .rows
                .iter_mut()
                .filter_map(|row| row.cells.get_mut(column))
            {
                cell.set_width(width);
            }
        }
    }

    /// Lay out the table and return its text, ending in a newline.
    pub fn get_text(&mut self) -> String {
        if self.rows.is_empty() {
            return "\n".into();
        }
        self.set_row_heights();
        self.set_column_widths();

        let rows: Vec<String> = self.rows.iter().map(TableRow::text).collect();
        let mut text = rows.join("\n");
        text.push('\n');
        text
    }
}
