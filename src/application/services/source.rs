//! Source resolution — turns a raw flag choice into an absolute descriptor.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::LocalFs;
use crate::domain::error::SourceError;
use crate::domain::source::{SourceDescriptor, SourceInput};

/// Resolve a [`SourceInput`] into a [`SourceDescriptor`].
///
/// Paths become absolute via the injected filesystem port; git URLs pass
/// through verbatim. `Unset` defaults to the current working directory as a
/// local source. Deterministic — the only filesystem effect is the
/// directory check for local sources.
///
/// # Errors
///
/// Returns [`SourceError::NotADirectory`] when a local source (explicit or
/// defaulted) does not resolve to a directory, or an error when the working
/// directory cannot be determined.
pub fn resolve_source(fs: &impl LocalFs, input: SourceInput) -> Result<SourceDescriptor> {
    match input {
        SourceInput::Git(url) => Ok(SourceDescriptor::Git(url)),
        SourceInput::Binary(path) => {
            let abs = fs.absolutize(Path::new(&path))?;
            Ok(SourceDescriptor::Binary(abs))
        }
        SourceInput::Local(path) => local_descriptor(fs, Path::new(&path)),
        SourceInput::Unset => local_descriptor(fs, Path::new(".")),
    }
}

fn local_descriptor(fs: &impl LocalFs, path: &Path) -> Result<SourceDescriptor> {
    let abs = fs.absolutize(path)?;
    if !fs.is_dir(&abs) {
        return Err(SourceError::NotADirectory(abs.display().to_string()).into());
    }
    Ok(SourceDescriptor::Local(abs))
}
