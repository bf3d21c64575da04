//! Content cache setup
//!
//! The cache itself belongs to the renderer; the launcher only performs the
//! one-shot setup before anything else happens.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// One-shot setup hook of the content cache
pub trait ContentCache {
    fn setup(&mut self) -> Result<()>;
}

/// Cache stored in a directory on disk
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Cache in the platform cache directory (%LOCALAPPDATA%/Aerial/cache on Windows)
    pub fn from_platform() -> Result<Self> {
        Ok(Self::new(crate::config::get_cache_directory()?))
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

impl ContentCache for DiskCache {
    fn setup(&mut self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create cache directory {}", self.dir.display()))?;
        tracing::info!("Content cache ready at {}", self.dir.display());
        Ok(())
    }
}
