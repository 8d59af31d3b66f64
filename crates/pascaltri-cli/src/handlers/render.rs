use crate::config::Settings;
use crate::context::ExecutionContext;
use crate::diagnostics::Diagnostics;
use crate::presentation::build_renderer;
use crate::types::LogLevel;
use anyhow::{Context, Result};
use pascaltri_engine::TriangleGenerator;
use std::io::{self, BufWriter, Write};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let settings = ctx.settings();
    let diagnostics = ctx.diagnostics();

    if let Some(source) = ctx.config_source() {
        diagnostics.debug(format_args!("config: {}", source.path().display()));
    }
    diagnostics.info(format_args!(
        "rendering {} rows as {} (modulus {})",
        settings.width, settings.format, settings.modulus
    ));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let produced = render_triangle(&mut out, settings, diagnostics)?;
    out.flush()?;

    diagnostics.debug(format_args!("wrote {} rows", produced));
    Ok(())
}

/// Generate `settings.width` rows and stream them through the renderer
/// selected by `settings.format`. Returns the number of rows written.
///
/// Fails before writing anything when the row buffers cannot be allocated.
pub fn render_triangle(
    out: &mut dyn Write,
    settings: &Settings,
    diagnostics: &Diagnostics,
) -> Result<usize> {
    let mut generator = TriangleGenerator::try_new(settings.width)
        .with_context(|| format!("size {} is too large", settings.width))?;
    let renderer = build_renderer(settings.format, settings.modulus);
    let max_size = settings.width;
    let trace = diagnostics.enabled(LogLevel::Trace);

    generator.generate(|row| {
        if trace {
            diagnostics.trace(format_args!("row {} sum {}", row.index(), row.wrapping_sum()));
        }
        renderer.render(&mut *out, row.values(), row.index(), max_size)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RenderFormat;

    fn settings(format: RenderFormat, modulus: u32, width: usize) -> Settings {
        Settings {
            modulus,
            width,
            format,
            log_level: LogLevel::Warn,
        }
    }

    fn render(settings: &Settings) -> (usize, String) {
        let mut out = Vec::new();
        let diagnostics = Diagnostics::new(LogLevel::Error);
        let produced = render_triangle(&mut out, settings, &diagnostics).unwrap();
        (produced, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_plain_minimum_triangle_has_sixteen_rows() {
        let (produced, text) = render(&settings(RenderFormat::Plain, 2, 16));
        assert_eq!(produced, 16);
        assert_eq!(text.lines().count(), 16);
        assert_eq!(
            text.lines().last().map(|l| l.split_whitespace().count()),
            Some(16)
        );
    }

    #[test]
    fn test_bitmap_header_counts_rendered_lines() {
        let (_, text) = render(&settings(RenderFormat::Bitmap, 3, 16));
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P2"));
        assert_eq!(lines.next(), Some("34 32"));
        assert_eq!(lines.next(), Some("3"));
        assert_eq!(lines.count(), 32);
    }

    #[test]
    fn test_stops_on_write_failure() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let diagnostics = Diagnostics::new(LogLevel::Error);
        let settings = settings(RenderFormat::Plain, 2, 16);
        let err = render_triangle(&mut Closed, &settings, &diagnostics).unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_unallocatable_size_fails_before_output() {
        let diagnostics = Diagnostics::new(LogLevel::Error);
        let mut out = Vec::new();
        let err = render_triangle(
            &mut out,
            &settings(RenderFormat::Plain, 2, usize::MAX),
            &diagnostics,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), format!("size {} is too large", usize::MAX));
        assert!(out.is_empty());
    }
}
