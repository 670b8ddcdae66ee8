//! Core library for the scala2pyspark rewriter.
//!
//! This library turns Scala Spark sources into a rough PySpark scaffold by
//! running each line through an ordered chain of text rules. The output is a
//! starting point to be finished by hand, not a faithful translation.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// The ordered rewrite stages and the signature cleaner.
pub mod rewriter;

/// Reading Scala sources and the `ScalaToPyspark` converter.
pub mod source;

/// Error type for resource failures.
pub mod error;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module for colored and tabular CLI output.
pub mod output;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Argument parsing, logging setup and command dispatch.
pub mod entry_point;

pub use error::ConvertError;
pub use rewriter::{rewrite_lines, Pipeline, Stage, StageKind};
pub use source::{read_lines, Conversion, ScalaToPyspark};
