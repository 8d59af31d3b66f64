//! Custom assertions for pascaltri output validation.
//!
//! Provides high-level helpers that make tests more readable:
//! - Parsing plain/pyramid text back into rows
//! - Reading the PGM header and pixel lines of bitmap output
//! - Comparing parsed rows against the engine

use anyhow::{Context, Result};
use pascaltri_engine::Cell;
use predicates::prelude::*;

/// Parse text output (plain or pyramid) into rows of numbers.
pub fn parse_text_rows(output: &str) -> Result<Vec<Vec<Cell>>> {
    output
        .lines()
        .enumerate()
        .map(|(n, line)| {
            line.split_whitespace()
                .map(|token| {
                    token
                        .parse::<Cell>()
                        .with_context(|| format!("Line {}: '{}' is not a number", n + 1, token))
                })
                .collect()
        })
        .collect()
}

/// Collapse runs of whitespace so rows can be compared as `"1 2 1"`.
pub fn normalize_row(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip trailing whitespace from every line, for stable snapshots.
pub fn trim_line_ends(output: &str) -> String {
    output
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header of a plain PGM (`P2`) image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgmHeader {
    pub width: usize,
    pub height: usize,
    pub max_value: u32,
}

/// Parsed plain PGM image.
#[derive(Debug, Clone)]
pub struct PgmImage {
    pub header: PgmHeader,
    pub rows: Vec<Vec<u32>>,
}

/// Parse bitmap output, keeping one pixel row per text line.
pub fn parse_pgm(output: &str) -> Result<PgmImage> {
    let mut lines = output.lines();

    let tag = lines.next().context("Missing format tag")?;
    if tag != "P2" {
        anyhow::bail!("Expected format tag 'P2', got '{}'", tag);
    }

    let dims = lines.next().context("Missing dimensions line")?;
    let (width, height) = dims
        .split_once(' ')
        .with_context(|| format!("Malformed dimensions '{}'", dims))?;
    let width = width.parse().context("Invalid width")?;
    let height = height.parse().context("Invalid height")?;

    let max_value = lines
        .next()
        .context("Missing max value line")?
        .trim()
        .parse()
        .context("Invalid max value")?;

    let rows = lines
        .map(|line| {
            line.split_whitespace()
                .map(|token| {
                    token
                        .parse::<u32>()
                        .with_context(|| format!("'{}' is not a pixel value", token))
                })
                .collect()
        })
        .collect::<Result<Vec<Vec<u32>>>>()?;

    Ok(PgmImage {
        header: PgmHeader {
            width,
            height,
            max_value,
        },
        rows,
    })
}

/// Assert that `rows` are exactly the first `rows.len()` rows of the triangle.
pub fn assert_triangle_rows(rows: &[Vec<Cell>]) -> Result<()> {
    let expected = pascaltri_engine::collect_rows(rows.len());

    for (n, (got, want)) in rows.iter().zip(expected.iter()).enumerate() {
        if got != want {
            anyhow::bail!("Row {} mismatch: got {:?}, expected {:?}", n, got, want);
        }
    }

    Ok(())
}

/// Predicate matching clap's usage line.
pub fn usage_message() -> impl Predicate<str> {
    predicate::str::contains("Usage:")
        .and(predicate::str::contains("<MODULUS> <SIZE>"))
}
