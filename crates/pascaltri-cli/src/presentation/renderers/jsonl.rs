use super::traits::RowRenderer;
use crate::types::RenderFormat;
use anyhow::Result;
use pascaltri_engine::Cell;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonRow<'a> {
    row: usize,
    values: &'a [Cell],
}

/// One JSON object per line: `{"row":n,"values":[...]}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlRenderer;

impl RowRenderer for JsonlRenderer {
    fn render(
        &self,
        out: &mut dyn Write,
        row: &[Cell],
        size: usize,
        _max_size: usize,
    ) -> Result<()> {
        let record = JsonRow {
            row: size,
            values: &row[..=size],
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
        Ok(())
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Jsonl
    }
}
