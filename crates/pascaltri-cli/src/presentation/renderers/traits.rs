use crate::types::RenderFormat;
use anyhow::Result;
use pascaltri_engine::Cell;
use std::io::Write;

/// Output strategy for one triangle row.
///
/// `row` holds at least `size + 1` values, C(size, 0..=size). `max_size` is
/// the number of rows the run generates and is used for centering and for
/// image dimensions. Rows arrive in order starting at `size == 0`.
pub trait RowRenderer {
    fn render(
        &self,
        out: &mut dyn Write,
        row: &[Cell],
        size: usize,
        max_size: usize,
    ) -> Result<()>;

    fn format(&self) -> RenderFormat;
}
