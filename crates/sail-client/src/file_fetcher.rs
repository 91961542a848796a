use std::path::{Path, PathBuf};

use sail_core::error::AppError;
use sail_core::models::Provider;
use sail_core::traits::Fetcher;

/// Reads schedule markup from a saved copy of the page on disk.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Fetcher for FileFetcher {
    fn provider(&self) -> Provider {
        Provider::Static
    }

    async fn fetch(&self) -> Result<String, AppError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::FileError(format!("{}: {e}", self.path.display())))
    }
}
