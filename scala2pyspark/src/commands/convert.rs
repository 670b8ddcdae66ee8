//! Default command: rewrite Scala files.

use crate::error::ConvertError;
use crate::output::{print_file_header, print_written};
use crate::rewriter::Pipeline;
use crate::source::{Conversion, ScalaToPyspark};

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for the convert command.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Write files here instead of printing them.
    pub output_dir: Option<PathBuf>,
    /// Extension of written files.
    pub extension: String,
    /// Emit JSON instead of text.
    pub json: bool,
}

/// Convert every file, in parallel.
///
/// All files are read before anything is returned, so a single unreadable
/// file yields an error and no conversions.
pub fn convert_files(
    files: &[PathBuf],
    pipeline: &Pipeline,
) -> Result<Vec<Conversion>, ConvertError> {
    files
        .par_iter()
        .map(|path| ScalaToPyspark::with_pipeline(path, pipeline.clone()).convert())
        .collect()
}

/// Where a converted file lands inside `output_dir`.
pub fn output_path(output_dir: &Path, source: &Path, extension: &str) -> PathBuf {
    let mut name = source
        .file_stem()
        .unwrap_or(source.as_os_str())
        .to_os_string();
    name.push(".");
    name.push(extension);
    output_dir.join(name)
}

/// Convert `files` and print or write the results.
///
/// # Errors
///
/// Returns an error if a source cannot be read or an output cannot be written.
pub fn run_convert<W: Write>(
    files: &[PathBuf],
    options: &ConvertOptions,
    mut writer: W,
) -> Result<Vec<Conversion>> {
    let conversions = convert_files(files, &Pipeline::standard())?;
    log::info!("converted {} file(s)", conversions.len());

    if let Some(dir) = &options.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        for conversion in &conversions {
            let target = output_path(dir, &conversion.path, &options.extension);
            fs::write(&target, conversion.render()).map_err(|source| ConvertError::Write {
                path: target.clone(),
                source,
            })?;
            if !options.json {
                print_written(&mut writer, conversion, &target)?;
            }
        }
    }

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&conversions)?)?;
    } else if options.output_dir.is_none() {
        let with_headers = conversions.len() > 1;
        for conversion in &conversions {
            if with_headers {
                print_file_header(&mut writer, &conversion.path)?;
            }
            write!(writer, "{}", conversion.render())?;
        }
    }

    Ok(conversions)
}
