mod format;

pub use format::{center, ljust, rjust, sanitize_controls, take_width, text_width};
