/// Fallback precision for float cells whose column sets no `decimal_places`.
pub const DEFAULT_DECIMAL_PLACES: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    /// Left for text, right for numbers, decided per cell.
    #[default]
    Default,
}

impl Alignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" | "l" => Some(Alignment::Left),
            "center" | "centre" | "c" => Some(Alignment::Center),
            "right" | "r" => Some(Alignment::Right),
            "default" | "" => Some(Alignment::Default),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Default => "default",
        }
    }
}

/// One rendered column.
///
/// `width` is signed: a positive width wraps oversized text onto extra
/// physical lines, a negative width truncates text to `|width|` instead.
/// Zero is rejected by [`render`](super::render).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub header: String,
    pub width: i32,
    pub alignment: Alignment,
    pub decimal_places: Option<usize>,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>, width: i32) -> Self {
        Self {
            header: header.into(),
            width,
            alignment: Alignment::Default,
            decimal_places: None,
        }
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn decimals(mut self, places: usize) -> Self {
        self.decimal_places = Some(places);
        self
    }

    /// Display cells every line of this column occupies.
    pub fn cell_width(&self) -> usize {
        self.width.unsigned_abs() as usize
    }

    pub fn truncates(&self) -> bool {
        self.width < 0
    }

    pub fn precision(&self) -> usize {
        self.decimal_places.unwrap_or(DEFAULT_DECIMAL_PLACES)
    }

    pub fn blank(&self) -> String {
        " ".repeat(self.cell_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_width_truncates_with_absolute_size() {
        let column = ColumnSpec::new("NAME", -12);
        assert!(column.truncates());
        assert_eq!(column.cell_width(), 12);
        assert_eq!(column.blank().len(), 12);
    }

    #[test]
    fn precision_falls_back_to_default() {
        assert_eq!(ColumnSpec::new("X", 8).precision(), DEFAULT_DECIMAL_PLACES);
        assert_eq!(ColumnSpec::new("X", 8).decimals(2).precision(), 2);
    }

    #[test]
    fn alignment_parse() {
        assert_eq!(Alignment::parse("RIGHT"), Some(Alignment::Right));
        assert_eq!(Alignment::parse("centre"), Some(Alignment::Center));
        assert_eq!(Alignment::parse(""), Some(Alignment::Default));
        assert_eq!(Alignment::parse("justify"), None);
    }
}
