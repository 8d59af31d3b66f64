pub mod cells;
pub mod padding;
pub mod palette;

pub use cells::write_numeric_cells;
pub use padding::{centering_offset, write_spaces};
pub use palette::{ASCII_PATTERNS, glyph_for, gray_level};
