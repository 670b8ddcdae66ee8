//! Tests for the init command.
use anyhow::Result;
use scala2pyspark::config::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_config_file() -> Result<()> {
    let temp = tempdir()?;
    let mut buffer = Vec::new();

    scala2pyspark::commands::run_init_in(temp.path(), &mut buffer)?;

    let config_path = temp.path().join(".scala2pyspark.toml");
    let content = fs::read_to_string(&config_path)?;
    assert!(content.contains("[scala2pyspark]"));

    // The generated file must load back.
    let config = Config::load_from_path(temp.path());
    assert_eq!(config.scala2pyspark.extension.as_deref(), Some("py"));
    assert_eq!(config.config_file_path, Some(config_path));
    Ok(())
}

#[test]
fn test_init_skips_existing_config() -> Result<()> {
    let temp = tempdir()?;
    let config_path = temp.path().join(".scala2pyspark.toml");
    fs::write(&config_path, "# mine")?;

    let mut buffer = Vec::new();
    scala2pyspark::commands::run_init_in(temp.path(), &mut buffer)?;

    assert_eq!(fs::read_to_string(&config_path)?, "# mine");
    let output = String::from_utf8(buffer)?;
    assert!(output.contains(".scala2pyspark.toml already exists - skipping"));
    Ok(())
}

#[test]
fn test_init_leaves_pyproject_untouched() -> Result<()> {
    let temp = tempdir()?;
    let pyproject_path = temp.path().join("pyproject.toml");
    let original = "[project]\nname = \"demo\"";
    fs::write(&pyproject_path, original)?;

    let mut buffer = Vec::new();
    scala2pyspark::commands::run_init_in(temp.path(), &mut buffer)?;

    assert_eq!(fs::read_to_string(&pyproject_path)?, original);
    let config_path = temp.path().join(".scala2pyspark.toml");
    assert!(config_path.exists());

    let config = Config::load_from_path(temp.path());
    assert_eq!(config.config_file_path, Some(config_path));
    Ok(())
}

#[test]
fn test_init_skips_pyproject_with_section() -> Result<()> {
    let temp = tempdir()?;
    let pyproject_path = temp.path().join("pyproject.toml");
    let original = "[tool.scala2pyspark]\nextension = \"py\"\n";
    fs::write(&pyproject_path, original)?;

    let mut buffer = Vec::new();
    scala2pyspark::commands::run_init_in(temp.path(), &mut buffer)?;

    assert_eq!(fs::read_to_string(&pyproject_path)?, original);
    assert!(!temp.path().join(".scala2pyspark.toml").exists());
    let output = String::from_utf8(buffer)?;
    assert!(output.contains("already contains [tool.scala2pyspark] - skipping"));
    Ok(())
}
