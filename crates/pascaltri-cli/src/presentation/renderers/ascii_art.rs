use super::traits::RowRenderer;
use crate::presentation::formatters::{centering_offset, glyph_for, write_spaces};
use crate::types::RenderFormat;
use anyhow::Result;
use pascaltri_engine::Cell;
use std::io::Write;

/// Columns taken by one glyph cell.
const GLYPH_CELL_WIDTH: usize = 2;

/// Centered triangle where every value is drawn as a doubled glyph
/// picked by `value mod modulus`.
#[derive(Debug, Clone, Copy)]
pub struct AsciiArtPyramidalRenderer {
    modulus: u32,
}

impl AsciiArtPyramidalRenderer {
    pub fn new(modulus: u32) -> Self {
        Self { modulus }
    }
}

impl RowRenderer for AsciiArtPyramidalRenderer {
    fn render(
        &self,
        out: &mut dyn Write,
        row: &[Cell],
        size: usize,
        max_size: usize,
    ) -> Result<()> {
        write_spaces(out, centering_offset(GLYPH_CELL_WIDTH, size, max_size))?;

        for value in &row[..=size] {
            let c = glyph_for(*value, self.modulus);
            write!(out, "{}{}", c, c)?;
        }

        writeln!(out)?;
        Ok(())
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Ascii
    }
}
