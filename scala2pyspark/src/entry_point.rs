use crate::cli::{Cli, Commands};
use crate::commands::{find_scala_files, run_convert, run_init, run_stages, ConvertOptions};
use crate::config::Config;
use crate::constants::DEFAULT_OUTPUT_EXTENSION;
use crate::rewriter::Pipeline;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Initialise `env_logger` on stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
/// Repeated calls (several runs in one process) are ignored.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Run scala2pyspark with the given arguments, writing output to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run scala2pyspark with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Returns the process exit code.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["scala2pyspark".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    init_logging(cli_var.output.verbose);
    log::debug!("scala2pyspark v{}", env!("CARGO_PKG_VERSION"));

    match cli_var.command {
        Some(Commands::Stages { json }) => {
            run_stages(&Pipeline::standard(), json, &mut *writer)?;
            return Ok(0);
        }
        Some(Commands::Init) => {
            run_init(writer)?;
            return Ok(0);
        }
        None => {}
    }

    let paths = if cli_var.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli_var.paths
    };

    if let Some(missing) = paths.iter().find(|p| !p.exists()) {
        eprintln!(
            "Error: The file or directory '{}' does not exist.",
            missing.display()
        );
        return Ok(1);
    }

    let config = Config::load_from_path(&paths[0]);
    if let Some(path) = &config.config_file_path {
        log::info!("using config {}", path.display());
    }
    let settings = config.scala2pyspark;

    let mut exclude_folders = settings.exclude_folders.unwrap_or_default();
    exclude_folders.extend(cli_var.exclude_folders);

    let options = ConvertOptions {
        output_dir: cli_var.output.output_dir.or(settings.output_dir),
        extension: cli_var
            .output
            .extension
            .or(settings.extension)
            .unwrap_or_else(|| DEFAULT_OUTPUT_EXTENSION.to_owned()),
        json: cli_var.output.json,
    };
    log::debug!("excluding folders: {exclude_folders:?}");

    let files = find_scala_files(&paths, &exclude_folders);
    if files.is_empty() {
        eprintln!("No Scala files found.");
        return Ok(0);
    }

    match run_convert(&files, &options, &mut *writer) {
        Ok(_) => Ok(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            Ok(1)
        }
    }
}
