pub mod ascii_art;
pub mod bitmap;
pub mod jsonl;
pub mod plain;
pub mod pyramid;
pub mod traits;

pub use ascii_art::AsciiArtPyramidalRenderer;
pub use bitmap::BitmapRenderer;
pub use jsonl::JsonlRenderer;
pub use plain::PlainTextRenderer;
pub use pyramid::PyramidalTextRenderer;
pub use traits::RowRenderer;

use crate::types::RenderFormat;

/// Pick the renderer for `format`. `modulus` must be at least 1; the CLI
/// clamps it to 2 before getting here.
pub fn build_renderer(format: RenderFormat, modulus: u32) -> Box<dyn RowRenderer> {
    match format {
        RenderFormat::Plain => Box::new(PlainTextRenderer),
        RenderFormat::Pyramid => Box::new(PyramidalTextRenderer),
        RenderFormat::Ascii => Box::new(AsciiArtPyramidalRenderer::new(modulus)),
        RenderFormat::Bitmap => Box::new(BitmapRenderer::new(modulus)),
        RenderFormat::Jsonl => Box::new(JsonlRenderer),
    }
}
