use super::traits::RowRenderer;
use crate::presentation::formatters::cells::NUMERIC_CELL_WIDTH;
use crate::presentation::formatters::{centering_offset, write_numeric_cells, write_spaces};
use crate::types::RenderFormat;
use anyhow::Result;
use pascaltri_engine::Cell;
use std::io::Write;

/// Plain text shifted right so the rows form a centered triangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PyramidalTextRenderer;

impl RowRenderer for PyramidalTextRenderer {
    fn render(
        &self,
        out: &mut dyn Write,
        row: &[Cell],
        size: usize,
        max_size: usize,
    ) -> Result<()> {
        write_spaces(out, centering_offset(NUMERIC_CELL_WIDTH, size, max_size))?;
        write_numeric_cells(out, &row[..=size])?;
        writeln!(out)?;
        Ok(())
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Pyramid
    }
}
