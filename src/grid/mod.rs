//! Fixed-width text grid rendering.
//!
//! [`render`] turns a column schema and a set of typed records into a
//! [`RenderedGrid`]: one [`LogicalRow`] per record, each holding one or more
//! physical lines in which every cell is padded to exactly its column width.

mod cell;
mod column;

pub use cell::{CellValue, format_cell, overflow_sentinel};
pub use column::{Alignment, ColumnSpec, DEFAULT_DECIMAL_PLACES};

use crate::error::{ProctabError, Result};
use crate::utils::{center, sanitize_controls, take_width};

/// One physical line: a cell string per column.
pub type PhysicalLine = Vec<String>;

/// One record's full representation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogicalRow {
    pub lines: Vec<PhysicalLine>,
}

impl LogicalRow {
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedGrid {
    pub rows: Vec<LogicalRow>,
}

impl RenderedGrid {
    pub fn physical_lines(&self) -> impl Iterator<Item = &PhysicalLine> {
        self.rows.iter().flat_map(|row| row.lines.iter())
    }

    pub fn line_count(&self) -> usize {
        self.rows.iter().map(LogicalRow::height).sum()
    }

    /// Joins every physical line's cells with `separator`.
    pub fn to_lines(&self, separator: &str) -> Vec<String> {
        self.physical_lines()
            .map(|cells| cells.join(separator))
            .collect()
    }
}

/// Checks that every column can be rendered.
pub fn validate_columns(columns: &[ColumnSpec]) -> Result<()> {
    for (index, column) in columns.iter().enumerate() {
        if column.width == 0 {
            return Err(ProctabError::invalid_column(index, "width must be non-zero"));
        }
    }
    Ok(())
}

/// Renders `records` under `columns`.
///
/// Fails before producing any row if a column is malformed or a record's
/// field count differs from the column count.
pub fn render<R>(columns: &[ColumnSpec], records: &[R]) -> Result<RenderedGrid>
where
    R: AsRef<[CellValue]>,
{
    validate_columns(columns)?;
    for (row, record) in records.iter().enumerate() {
        let found = record.as_ref().len();
        if found != columns.len() {
            return Err(ProctabError::shape_mismatch(row, columns.len(), found));
        }
    }

    let mut grid = RenderedGrid {
        rows: Vec::with_capacity(records.len()),
    };
    for record in records {
        let row = build_row(columns, record.as_ref());
        if row.height() > 0 {
            grid.rows.push(row);
        }
    }
    Ok(grid)
}

fn build_row(columns: &[ColumnSpec], record: &[CellValue]) -> LogicalRow {
    let mut row = LogicalRow::default();
    for (col_id, (column, value)) in columns.iter().zip(record).enumerate() {
        for (line_id, chunk) in format_cell(value, column).into_iter().enumerate() {
            if line_id >= row.lines.len() {
                row.lines.push(columns.iter().map(ColumnSpec::blank).collect());
            }
            row.lines[line_id][col_id] = chunk;
        }
    }
    row
}

/// Column headers, always centered, as a single physical line.
pub fn render_header(columns: &[ColumnSpec]) -> Result<PhysicalLine> {
    validate_columns(columns)?;
    Ok(columns
        .iter()
        .map(|column| {
            let width = column.cell_width();
            let header = sanitize_controls(&column.header).replace('\n', " ");
            center(take_width(&header, width), width)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("PID", 6),
            ColumnSpec::new("CMD", 4),
            ColumnSpec::new("LOAD", 8).decimals(2).align(Alignment::Right),
        ]
    }

    fn sample_records() -> Vec<Vec<CellValue>> {
        vec![
            vec![1.into(), "init".into(), 0.5.into()],
            vec![42.into(), "abcdefghij".into(), 3.14159.into()],
            vec![1234567.into(), "sh".into(), 99999999.0.into()],
        ]
    }

    #[test]
    fn every_cell_has_column_width() {
        let columns = sample_columns();
        let grid = render(&columns, &sample_records()).unwrap();
        for line in grid.physical_lines() {
            assert_eq!(line.len(), columns.len());
            for (cell, column) in line.iter().zip(&columns) {
                assert_eq!(cell.chars().count(), column.cell_width());
            }
        }
    }

    #[test]
    fn wrapped_cell_adds_physical_lines_with_blanks() {
        let grid = render(&sample_columns(), &sample_records()).unwrap();
        assert_eq!(grid.rows.len(), 3);
        assert_eq!(grid.line_count(), 5);

        let wrapped = &grid.rows[1];
        assert_eq!(wrapped.height(), 3);
        assert_eq!(wrapped.lines[0], vec!["    42", "abcd", "    3.14"]);
        assert_eq!(wrapped.lines[1], vec!["      ", "efgh", "        "]);
        assert_eq!(wrapped.lines[2], vec!["      ", "ij  ", "        "]);
    }

    #[test]
    fn overflowing_numbers_render_sentinels() {
        let grid = render(&sample_columns(), &sample_records()).unwrap();
        assert_eq!(grid.rows[2].lines[0], vec!["######", "sh  ", "########"]);
    }

    #[test]
    fn row_count_matches_records_without_wrapping() {
        let columns = vec![ColumnSpec::new("A", 5), ColumnSpec::new("B", 5)];
        let records = vec![
            vec![CellValue::from(1), CellValue::from("one")],
            vec![CellValue::from(2), CellValue::from("two")],
        ];
        let grid = render(&columns, &records).unwrap();
        assert_eq!(grid.rows.len(), records.len());
        assert_eq!(grid.line_count(), records.len());
    }

    #[test]
    fn rendering_is_idempotent() {
        let columns = sample_columns();
        let records = sample_records();
        let first = render(&columns, &records).unwrap();
        let second = render(&columns, &records).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_lines(" | "), second.to_lines(" | "));
    }

    #[test]
    fn shape_mismatch_fails_without_rows() {
        let columns = sample_columns();
        let records = vec![
            vec![CellValue::from(1), CellValue::from("a"), CellValue::from(1.0)],
            vec![CellValue::from(2), CellValue::from("b")],
        ];
        let err = render(&columns, &records).unwrap_err();
        assert!(matches!(
            err,
            ProctabError::ShapeMismatch {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn zero_width_column_is_invalid() {
        let columns = vec![ColumnSpec::new("A", 3), ColumnSpec::new("B", 0)];
        let records: Vec<Vec<CellValue>> = Vec::new();
        let err = render(&columns, &records).unwrap_err();
        assert!(matches!(err, ProctabError::InvalidColumn { index: 1, .. }));
    }

    #[test]
    fn blank_record_is_dropped() {
        let columns = vec![ColumnSpec::new("A", 3)];
        let records = vec![vec![CellValue::from("  ")], vec![CellValue::from("x")]];
        let grid = render(&columns, &records).unwrap();
        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.rows[0].lines[0], vec!["x  "]);
    }

    #[test]
    fn negative_width_column_never_wraps() {
        let columns = vec![ColumnSpec::new("NAME", -4), ColumnSpec::new("N", 3)];
        let records = vec![vec![CellValue::from("abcdefghij"), CellValue::from(5)]];
        let grid = render(&columns, &records).unwrap();
        assert_eq!(grid.line_count(), 1);
        assert_eq!(grid.to_lines("|"), vec!["abcd|  5"]);
    }

    #[test]
    fn header_is_centered_and_fitted() {
        let columns = vec![
            ColumnSpec::new("PID", 8).align(Alignment::Right),
            ColumnSpec::new("COMMAND", -4),
        ];
        assert_eq!(render_header(&columns).unwrap(), vec!["  PID   ", "COMM"]);
    }

    #[test]
    fn control_characters_in_records_keep_fixed_width() {
        let columns = vec![ColumnSpec::new("CMD", 4), ColumnSpec::new("N", -4)];
        let records = vec![vec![CellValue::from("a\tbcdefg"), CellValue::from("x\ty\u{1b}z")]];
        let grid = render(&columns, &records).unwrap();
        for line in grid.physical_lines() {
            for (cell, column) in line.iter().zip(&columns) {
                assert_eq!(cell.chars().count(), column.cell_width(), "cell {cell:?}");
                assert_eq!(crate::utils::text_width(cell), column.cell_width());
            }
        }
    }

    #[test]
    fn to_lines_joins_with_separator() {
        let columns = vec![ColumnSpec::new("A", 2), ColumnSpec::new("B", 3)];
        let records = vec![vec![CellValue::from(7), CellValue::from("abcd")]];
        let grid = render(&columns, &records).unwrap();
        assert_eq!(grid.to_lines(" | "), vec![" 7 | abc", "   | d  "]);
    }
}
