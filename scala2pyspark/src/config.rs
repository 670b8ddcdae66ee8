use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, PYPROJECT_FILENAME};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[scala2pyspark]` section.
    pub scala2pyspark: Scala2PysparkConfig,
    /// The file this was loaded from, `None` when defaults are in effect.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
/// Options that set defaults for the command line.
pub struct Scala2PysparkConfig {
    /// Directory converted files are written to.
    pub output_dir: Option<PathBuf>,
    /// Extension for written files, without the dot.
    pub extension: Option<String>,
    /// Folder names skipped while walking directories.
    pub exclude_folders: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone)]
struct PyProject {
    tool: ToolConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct ToolConfig {
    scala2pyspark: Scala2PysparkConfig,
}

impl Config {
    /// Loads configuration from the current directory upwards.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from `path` and walking up to the filesystem root.
    ///
    /// In each directory `.scala2pyspark.toml` wins over `pyproject.toml`. Files that
    /// fail to parse are skipped with a warning.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let own_toml = current.join(CONFIG_FILENAME);
            if let Some(content) = read_if_exists(&own_toml) {
                match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        log::debug!("loaded config from {}", own_toml.display());
                        config.config_file_path = Some(own_toml);
                        return config;
                    }
                    Err(e) => log::warn!("ignoring invalid {}: {e}", own_toml.display()),
                }
            }

            let pyproject_toml = current.join(PYPROJECT_FILENAME);
            if let Some(content) = read_if_exists(&pyproject_toml) {
                // Most pyproject files have no [tool.scala2pyspark] table; that is not an error.
                if let Ok(pyproject) = toml::from_str::<PyProject>(&content) {
                    log::debug!("loaded config from {}", pyproject_toml.display());
                    return Config {
                        scala2pyspark: pyproject.tool.scala2pyspark,
                        config_file_path: Some(pyproject_toml),
                    };
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}

fn read_if_exists(path: &Path) -> Option<String> {
    if path.exists() {
        fs::read_to_string(path).ok()
    } else {
        None
    }
}
