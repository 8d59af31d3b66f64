use super::traits::RowRenderer;
use crate::presentation::formatters::write_numeric_cells;
use crate::types::RenderFormat;
use anyhow::Result;
use pascaltri_engine::Cell;
use std::io::Write;

/// One row per line, values in fixed-width columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl RowRenderer for PlainTextRenderer {
    fn render(
        &self,
        out: &mut dyn Write,
        row: &[Cell],
        size: usize,
        _max_size: usize,
    ) -> Result<()> {
        write_numeric_cells(out, &row[..=size])?;
        writeln!(out)?;
        Ok(())
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Plain
    }
}
