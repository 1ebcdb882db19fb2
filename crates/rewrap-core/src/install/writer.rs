//! Writing generated files into the project directory

use crate::error::ScaffoldError;
use std::path::Path;
use tokio::fs;

/// Writes UTF-8 text files, creating parent directories as needed
#[allow(async_fn_in_trait)]
pub trait FileWriter {
    /// Write `content` to `path`, overwriting any existing file
    async fn write(&self, path: &Path, content: &str) -> Result<(), ScaffoldError>;
}

impl<W: FileWriter> FileWriter for &W {
    async fn write(&self, path: &Path, content: &str) -> Result<(), ScaffoldError> {
        (**self).write(path, content).await
    }
}

/// Writes to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskWriter;

impl FileWriter for DiskWriter {
    async fn write(&self, path: &Path, content: &str) -> Result<(), ScaffoldError> {
        let failed = |source: std::io::Error| ScaffoldError::WriteFailed {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(failed)?;
            }
        }
        fs::write(path, content).await.map_err(failed)
    }
}
