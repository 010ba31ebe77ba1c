/// Generic table framework types
///
/// This module provides the column types the stat tables are built from:
/// - ColumnDef: Column definition with cell extraction function
/// - Alignment: Text alignment for cells
use std::fmt;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Separator between adjacent columns
pub const COLUMN_GAP: &str = " ";

/// Text alignment for table cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// Column definition for a table
///
/// Defines how to extract and display a column's data from row items.
///
/// # Example
/// ```ignore
/// let avg_col = ColumnDef::new("AVG", 6, Alignment::Right, |line: &PlayerLine<BatterStats>| {
///     line.stat(|s| s.avg.clone())
/// });
/// ```
pub struct ColumnDef<T> {
    /// Column header text
    pub header: String,

    /// Column width in characters
    pub width: usize,

    /// Text alignment
    pub align: Alignment,

    /// Function to extract the cell text from row data
    pub cell_fn: Box<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> ColumnDef<T> {
    pub fn new<F>(header: impl Into<String>, width: usize, align: Alignment, cell_fn: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            header: header.into(),
            width,
            align,
            cell_fn: Box::new(cell_fn),
        }
    }

    pub fn cell(&self, row: &T) -> String {
        align_cell(&(self.cell_fn)(row), self.width, self.align)
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("header", &self.header)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("cell_fn", &"<function>")
            .finish()
    }
}

/// Pad or truncate `text` to exactly `width` display columns
pub fn align_cell(text: &str, width: usize, align: Alignment) -> String {
    let text = truncate(text, width);
    let pad = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(pad)),
        Alignment::Right => format!("{}{}", " ".repeat(pad), text),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Total display width of a table with these columns
pub fn table_width<T>(columns: &[ColumnDef<T>]) -> usize {
    let cells: usize = columns.iter().map(|c| c.width).sum();
    cells + columns.len().saturating_sub(1) * COLUMN_GAP.width()
}

pub fn header_line<T>(columns: &[ColumnDef<T>]) -> String {
    columns
        .iter()
        .map(|c| align_cell(&c.header, c.width, c.align))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

pub fn row_line<T>(columns: &[ColumnDef<T>], row: &T) -> String {
    columns
        .iter()
        .map(|c| c.cell(row))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRow {
        name: String,
        value: i32,
    }

    fn columns() -> Vec<ColumnDef<TestRow>> {
        vec![
            ColumnDef::new("Name", 8, Alignment::Left, |r: &TestRow| r.name.clone()),
            ColumnDef::new("Val", 4, Alignment::Right, |r: &TestRow| r.value.to_string()),
        ]
    }

    #[test]
    fn test_align_cell() {
        assert_eq!(align_cell("ab", 5, Alignment::Left), "ab   ");
        assert_eq!(align_cell("ab", 5, Alignment::Right), "   ab");
        assert_eq!(align_cell("ab", 5, Alignment::Center), " ab  ");
    }

    #[test]
    fn test_align_cell_truncates() {
        assert_eq!(align_cell("Guerrero", 4, Alignment::Left), "Guer");
        assert_eq!(align_cell("", 3, Alignment::Right), "   ");
    }

    #[test]
    fn test_header_and_row_lines() {
        let cols = columns();
        let row = TestRow {
            name: "Sale".to_string(),
            value: 14,
        };
        assert_eq!(header_line(&cols), "Name      Val");
        assert_eq!(row_line(&cols, &row), "Sale       14");
        assert_eq!(table_width(&cols), 13);
    }

    #[test]
    fn test_column_def_debug_hides_closure() {
        let cols = columns();
        let debug = format!("{:?}", cols[0]);
        assert!(debug.contains("\"Name\""));
        assert!(debug.contains("<function>"));
    }
}
