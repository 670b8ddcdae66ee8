//! Reading Scala sources and running them through the rewriter.

use crate::error::ConvertError;
use crate::rewriter::Pipeline;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Read every line from `reader`, keeping each line's terminator.
///
/// A final line without a newline is returned as-is.
pub fn read_lines<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Open `path` and read all of its lines.
pub fn read_file_lines(path: &Path) -> Result<Vec<String>, ConvertError> {
    let to_err = |source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_err)?;
    read_lines(BufReader::new(file)).map_err(to_err)
}

/// Result of converting one file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Conversion {
    /// Source file.
    pub path: PathBuf,
    /// Number of lines read from the source.
    pub input_line_count: usize,
    /// Rewritten lines, each with its terminator.
    pub lines: Vec<String>,
}

impl Conversion {
    /// Lines removed by filter stages.
    pub fn dropped(&self) -> usize {
        self.input_line_count.saturating_sub(self.lines.len())
    }

    /// The rewritten text.
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}

/// Converter bound to a single Scala file.
///
/// The file is read afresh on every call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ScalaToPyspark {
    scala_path: PathBuf,
    pipeline: Pipeline,
}

impl ScalaToPyspark {
    /// Converter for `scala_path` using the standard pipeline.
    pub fn new(scala_path: impl Into<PathBuf>) -> Self {
        Self::with_pipeline(scala_path, Pipeline::standard())
    }

    /// Converter for `scala_path` using a custom pipeline.
    pub fn with_pipeline(scala_path: impl Into<PathBuf>, pipeline: Pipeline) -> Self {
        Self {
            scala_path: scala_path.into(),
            pipeline,
        }
    }

    /// The source file.
    pub fn path(&self) -> &Path {
        &self.scala_path
    }

    /// Read and rewrite the file.
    pub fn convert(&self) -> Result<Conversion, ConvertError> {
        let input = read_file_lines(&self.scala_path)?;
        let input_line_count = input.len();
        log::debug!(
            "converting {} ({} lines)",
            self.scala_path.display(),
            input_line_count
        );
        Ok(Conversion {
            path: self.scala_path.clone(),
            input_line_count,
            lines: self.pipeline.run(input),
        })
    }

    /// Rewritten lines, in source order.
    pub fn lines(&self) -> Result<Vec<String>, ConvertError> {
        Ok(self.convert()?.lines)
    }

    /// Rewritten lines joined with no separator.
    pub fn render(&self) -> Result<String, ConvertError> {
        Ok(self.lines()?.concat())
    }

    /// Write the rendered text to `writer`.
    ///
    /// The text is written exactly as rendered. No trailing newline is
    /// appended, so a source whose last line lacks one ends without one.
    pub fn display_to<W: Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        write!(writer, "{}", self.render()?)?;
        Ok(())
    }

    /// Print the rendered text to stdout, with no trailing newline appended.
    pub fn display(&self) -> anyhow::Result<()> {
        self.display_to(&mut std::io::stdout().lock())
    }
}
