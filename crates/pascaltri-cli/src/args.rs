use crate::types::{LogLevel, RenderFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pascaltri")]
#[command(
    about = "Render rows of Pascal's triangle as text, ASCII art, or a PGM bitmap",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Divisor mapping values onto the palette (minimum 2)
    #[arg(allow_negative_numbers = true)]
    pub modulus: i64,

    /// Number of rows to generate (minimum 16)
    #[arg(allow_negative_numbers = true)]
    pub size: i64,

    /// Output format [default: config file, else bitmap]
    #[arg(long)]
    pub format: Option<RenderFormat>,

    /// Diagnostic verbosity on stderr [default: config file, else warn]
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Config file (falls back to $PASCALTRI_CONFIG, then the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
