// NOTE: pascaltri layering
//
// - pascaltri-engine owns the row buffers and the recurrence; it never
//   formats anything.
// - presentation/ holds the interchangeable renderers. They receive rows
//   by reference and write them straight to the output stream.
// - config/args/commands turn argv and the optional config file into one
//   immutable Settings value. Out-of-range modulus/size are clamped and
//   reported on stderr, never rejected.

mod args;
mod commands;
pub mod config;
pub mod context;
pub mod diagnostics;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::run;
pub use handlers::render::render_triangle;
