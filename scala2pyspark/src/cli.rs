use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.scala2pyspark.toml):
  Create this file in your project root to set defaults.

  [scala2pyspark]
  output_dir = \"pyspark\"         # Write converted files here instead of stdout
  extension = \"py\"               # Extension of written files
  exclude_folders = [\"target\"]   # Folder names skipped when walking directories

  The same keys are read from [tool.scala2pyspark] in pyproject.toml.
  Set RUST_LOG=debug (or pass --verbose) to see what each stage does.
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Write converted files into this directory instead of printing them.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Extension for files written to the output directory (default: py).
    #[arg(long)]
    pub extension: Option<String>,

    /// Output conversions as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging (debug-level logging).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    name = "scala2pyspark",
    author,
    version,
    about = "scala2pyspark - Rewrite Scala Spark code into a PySpark scaffold, line by line",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute; converting is the default.
    pub command: Option<Commands>,

    /// Scala files or directories to convert.
    /// Directories are searched recursively for `.scala` files.
    pub paths: Vec<PathBuf>,

    /// Output options.
    #[command(flatten)]
    pub output: OutputOptions,

    /// Folders to skip when walking directories.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
/// Available subcommands.
pub enum Commands {
    /// Print the rewrite stages in the order they run.
    Stages {
        /// Output JSON.
        #[arg(long)]
        json: bool,
    },
    /// Create a default .scala2pyspark.toml in the current directory.
    Init,
}
