use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::constants::{CONFIG_FILENAME, PYPROJECT_FILENAME};

/// Default contents of `.scala2pyspark.toml`.
const DEFAULT_CONFIG: &str = r#"
[scala2pyspark]
output_dir = "pyspark"          # Write converted files here instead of stdout
extension = "py"                # Extension of written files
exclude_folders = ["target", "project", ".bsp"]
"#;

/// Executes the init command in the current directory.
pub fn run_init<W: Write>(writer: &mut W) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    run_init_in(&current_dir, writer)
}

/// Executes the init command in a specific directory.
///
/// Only `.scala2pyspark.toml` is ever written. An existing `pyproject.toml` is
/// read but never modified; if it already carries `[tool.scala2pyspark]`, no
/// file is created since the new one would shadow that table.
pub fn run_init_in<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    writeln!(writer, "Initializing scala2pyspark configuration...")?;

    let pyproject_path = root.join(PYPROJECT_FILENAME);
    let config_path = root.join(CONFIG_FILENAME);

    if config_path.exists() {
        writeln!(writer, "  • {CONFIG_FILENAME} already exists - skipping.")?;
    } else if has_pyproject_table(&pyproject_path)? {
        writeln!(
            writer,
            "  • {PYPROJECT_FILENAME} already contains [tool.scala2pyspark] - skipping."
        )?;
    } else {
        let mut file = fs::File::create(&config_path)
            .with_context(|| format!("Failed to create {}", config_path.display()))?;
        writeln!(file, "{}", DEFAULT_CONFIG.trim())?;
        writeln!(
            writer,
            "  • Created {CONFIG_FILENAME} with default configuration."
        )?;
    }

    writeln!(writer, "Initialization complete!")?;
    Ok(())
}

fn has_pyproject_table(pyproject_path: &Path) -> Result<bool> {
    if !pyproject_path.exists() {
        return Ok(false);
    }
    let content = fs::read_to_string(pyproject_path)
        .with_context(|| format!("Failed to read {}", pyproject_path.display()))?;
    Ok(content.contains("[tool.scala2pyspark]"))
}
