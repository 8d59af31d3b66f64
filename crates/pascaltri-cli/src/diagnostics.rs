//! Leveled diagnostics on stderr.
//!
//! Stdout carries rendered output only, so every message here goes to
//! stderr. Colors are used only when stderr is a terminal.

use crate::types::LogLevel;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    level: LogLevel,
    color: bool,
}

impl Diagnostics {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            color: std::io::stderr().is_terminal(),
        }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level
    }

    pub fn error(&self, message: impl fmt::Display) {
        if let Some(line) = self.format_line(LogLevel::Error, &message) {
            eprintln!("{}", line);
        }
    }

    pub fn warn(&self, message: impl fmt::Display) {
        if let Some(line) = self.format_line(LogLevel::Warn, &message) {
            eprintln!("{}", line);
        }
    }

    pub fn info(&self, message: impl fmt::Display) {
        if let Some(line) = self.format_line(LogLevel::Info, &message) {
            eprintln!("{}", line);
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        if let Some(line) = self.format_line(LogLevel::Debug, &message) {
            eprintln!("{}", line);
        }
    }

    pub fn trace(&self, message: impl fmt::Display) {
        if let Some(line) = self.format_line(LogLevel::Trace, &message) {
            eprintln!("{}", line);
        }
    }

    fn format_line(&self, level: LogLevel, message: &dyn fmt::Display) -> Option<String> {
        if !self.enabled(level) {
            return None;
        }

        let prefix = match level {
            LogLevel::Error => "Error:",
            LogLevel::Warn => "Warning:",
            LogLevel::Info => "Info:",
            LogLevel::Debug => "Debug:",
            LogLevel::Trace => "Trace:",
        };

        let line = if !self.color {
            format!("{} {}", prefix, message)
        } else {
            match level {
                LogLevel::Error => format!("{} {}", prefix.red(), message),
                LogLevel::Warn => format!("{} {}", prefix.yellow(), message),
                LogLevel::Info => format!("{} {}", prefix.cyan(), message),
                LogLevel::Debug | LogLevel::Trace => format!("{} {}", prefix.dimmed(), message),
            }
        };
        Some(line)
    }
}
