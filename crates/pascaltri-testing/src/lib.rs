//! Testing infrastructure for pascaltri integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated environment (config file, env vars) for CLI runs
//! - `assertions`: Parsers and checks for the text and bitmap outputs

pub mod assertions;
pub mod world;

pub use world::{CliResult, TestWorld};
