use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// Output format, one per renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    Plain,
    Pyramid,
    Ascii,
    #[default]
    Bitmap,
    Jsonl,
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFormat::Plain => write!(f, "plain"),
            RenderFormat::Pyramid => write!(f, "pyramid"),
            RenderFormat::Ascii => write!(f, "ascii"),
            RenderFormat::Bitmap => write!(f, "bitmap"),
            RenderFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Diagnostic verbosity. Variants are ordered from quietest to loudest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum, Deserialize,
)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
