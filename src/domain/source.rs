//! Component source descriptors and mutually-exclusive source selection.
//!
//! The three `--binary` / `--git` / `--local` flags collapse into a single
//! tagged value as early as possible so downstream dispatch is exhaustive
//! instead of string-flag-driven.

use std::path::PathBuf;

use crate::domain::error::SourceError;

/// The resolved, exclusive origin of a component's deployable content.
///
/// Paths are absolute by the time a descriptor exists; git URLs are kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDescriptor {
    /// Remote git repository URL.
    Git(String),
    /// Absolute path to a local source directory.
    Local(PathBuf),
    /// Absolute path to a prebuilt binary artifact.
    Binary(PathBuf),
}

impl SourceDescriptor {
    /// Short mode label used in messaging and platform annotations.
    #[must_use]
    pub fn mode(&self) -> &'static str {
        match self {
            SourceDescriptor::Git(_) => "git",
            SourceDescriptor::Local(_) => "local",
            SourceDescriptor::Binary(_) => "binary",
        }
    }
}

/// Raw source choice taken from CLI flags, before path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    Git(String),
    Local(String),
    Binary(String),
    /// No source flag given; resolves to the current working directory.
    Unset,
}

impl SourceInput {
    /// Collapse the three optional source flags into one choice.
    ///
    /// Runs before any collaborator call: more than one non-empty flag is a
    /// user error regardless of what the platform would say.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::ConflictingSources`] when two or more flags
    /// are non-empty.
    pub fn from_flags(
        binary: Option<&str>,
        git: Option<&str>,
        local: Option<&str>,
    ) -> Result<Self, SourceError> {
        let binary = binary.filter(|s| !s.is_empty());
        let git = git.filter(|s| !s.is_empty());
        let local = local.filter(|s| !s.is_empty());

        let given = [binary, git, local].iter().filter(|v| v.is_some()).count();
        if given > 1 {
            return Err(SourceError::ConflictingSources);
        }

        if let Some(path) = binary {
            Ok(SourceInput::Binary(path.to_string()))
        } else if let Some(url) = git {
            Ok(SourceInput::Git(url.to_string()))
        } else if let Some(path) = local {
            Ok(SourceInput::Local(path.to_string()))
        } else {
            Ok(SourceInput::Unset)
        }
    }
}
