use std::path::PathBuf;

/// Failures while acquiring input or storing output.
///
/// Rewriting itself never fails; only the surrounding I/O can.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The Scala source could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The converted output could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Path the failed operation referred to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
