use super::column::{Alignment, ColumnSpec};
use crate::utils::{center, ljust, rjust, sanitize_controls, take_width, text_width};

/// A single record field handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Float(_))
    }

    /// Numbers go to fixed-point. Text loses surrounding whitespace and its
    /// control characters, which would otherwise skew width measurement.
    fn preformat(&self, column: &ColumnSpec) -> String {
        match self {
            CellValue::Integer(value) => value.to_string(),
            CellValue::Float(value) => format!("{value:.*}", column.precision()),
            CellValue::Text(value) => sanitize_controls(value.trim()),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(value.into())
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Integer(value.into())
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

type Justify = fn(&str, usize) -> String;

fn justifier(declared: Alignment, numeric: bool) -> Justify {
    match (declared, numeric) {
        (Alignment::Left, _) | (Alignment::Default, false) => ljust,
        (Alignment::Right, _) | (Alignment::Default, true) => rjust,
        (Alignment::Center, _) => center,
    }
}

/// Overflow sentinel for a number that does not fit `width`.
pub fn overflow_sentinel(width: usize) -> String {
    "#".repeat(width)
}

/// Formats one cell into its padded physical-line chunks, top to bottom.
///
/// An empty result means the cell contributes nothing but blanks.
pub fn format_cell(value: &CellValue, column: &ColumnSpec) -> Vec<String> {
    let width = column.cell_width();
    let numeric = value.is_numeric();
    let mut text = value.preformat(column);

    let overflow = numeric && text_width(&text) > width;
    if overflow {
        text = overflow_sentinel(width);
    }
    let truncate = overflow || (!numeric && column.truncates());

    let mut chunks = Vec::new();
    for segment in text.split('\n').map(str::trim) {
        if truncate {
            chunks.push(take_width(segment, width).trim());
            continue;
        }
        let mut rest = segment;
        while !rest.is_empty() {
            let chunk = take_width(rest, width);
            rest = &rest[chunk.len()..];
            chunks.push(chunk.trim());
        }
    }

    let justify = justifier(column.alignment, numeric);
    chunks
        .into_iter()
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| justify(chunk, width))
        .collect()
}
