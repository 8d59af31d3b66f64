//! # Presentation Layer
//!
//! Turns generated rows into bytes on an output stream.
//!
//! ```text
//! [ Handler ] --> [ TriangleGenerator ] --(RowView)--> [ RowRenderer ] --> Output
//!                       (engine)                           (strategy)
//! ```
//!
//! ## Directory Guide
//!
//! ### `renderers/`
//! * One strategy per output format behind the `RowRenderer` trait.
//! * A renderer is handed each row exactly once, in order, together with
//!   the configured width, and writes it immediately. Renderers keep no
//!   per-row state; the bitmap header is keyed off row 0.
//!
//! ### `formatters/`
//! * Reusable write helpers (padding, fixed-width cells, glyph palette)
//!   shared by the renderers.

pub mod formatters;
pub mod renderers;

pub use renderers::{RowRenderer, build_renderer};
