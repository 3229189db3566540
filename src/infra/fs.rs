//! Filesystem infrastructure — implements the `LocalFs` port over `std::fs`.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;

/// Drop `.` components so `./frontend` and `.` resolve cleanly.
pub(crate) fn normalize(path: PathBuf) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Production filesystem implementation of [`LocalFs`].
pub struct StdFs;

impl LocalFs for StdFs {
    fn absolutize(&self, path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            return Ok(normalize(path.to_path_buf()));
        }
        let cwd = std::env::current_dir().context("determining the working directory")?;
        Ok(normalize(cwd.join(path)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
