use super::traits::RowRenderer;
use crate::presentation::formatters::gray_level;
use crate::types::RenderFormat;
use anyhow::Result;
use pascaltri_engine::Cell;
use std::io::Write;

/// Plain PGM (`P2`) image, two pixels per value and two pixel lines per row.
///
/// Every line is `2 * max_size + 2` pixels wide; the header is written
/// before row 0.
#[derive(Debug, Clone, Copy)]
pub struct BitmapRenderer {
    modulus: u32,
}

impl BitmapRenderer {
    pub fn new(modulus: u32) -> Self {
        Self { modulus }
    }

    pub fn image_width(max_size: usize) -> usize {
        2 * max_size + 2
    }

    pub fn image_height(max_size: usize) -> usize {
        2 * max_size
    }

    fn write_header(&self, out: &mut dyn Write, max_size: usize) -> Result<()> {
        writeln!(out, "P2")?;
        writeln!(
            out,
            "{} {}",
            Self::image_width(max_size),
            Self::image_height(max_size)
        )?;
        writeln!(out, "{}", self.modulus)?;
        Ok(())
    }

    fn write_pixel(out: &mut dyn Write, level: u32) -> Result<()> {
        write!(out, "{:>3} ", level)?;
        Ok(())
    }

    /// Black margin of `max_size - size` pixels.
    fn write_margin(out: &mut dyn Write, size: usize, max_size: usize) -> Result<()> {
        let gap = max_size.saturating_sub(size);
        for _ in 0..gap {
            Self::write_pixel(out, 0)?;
        }
        Ok(())
    }
}

impl RowRenderer for BitmapRenderer {
    fn render(
        &self,
        out: &mut dyn Write,
        row: &[Cell],
        size: usize,
        max_size: usize,
    ) -> Result<()> {
        if size == 0 {
            self.write_header(out, max_size)?;
        }

        for _ in 0..2 {
            Self::write_margin(out, size, max_size)?;
            for value in &row[..=size] {
                let level = gray_level(*value, self.modulus);
                Self::write_pixel(out, level)?;
                Self::write_pixel(out, level)?;
            }
            Self::write_margin(out, size, max_size)?;
            writeln!(out)?;
        }

        Ok(())
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Bitmap
    }
}
