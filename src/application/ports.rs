//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::Scope;

// ── Value Types ───────────────────────────────────────────────────────────────

/// How a path-sourced component feeds the platform build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMode {
    /// Source tree in a local directory.
    Local,
    /// Prebuilt binary artifact.
    Binary,
}

impl PathMode {
    /// Wire label the platform adapter records for the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PathMode::Local => "local",
            PathMode::Binary => "binary",
        }
    }
}

// ── Platform Port Traits ──────────────────────────────────────────────────────

/// Catalog of component types the platform can build.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Whether `component_type` exists in the platform catalog.
    async fn type_exists(&self, component_type: &str) -> Result<bool>;
}

/// Read-only queries about existing components.
#[allow(async_fn_in_trait)]
pub trait ComponentQuery {
    /// Whether a component named `name` already exists in (application, project).
    async fn component_exists(
        &self,
        name: &str,
        application: &str,
        project: &str,
    ) -> Result<bool>;
}

/// Component creation and build operations.
#[allow(async_fn_in_trait)]
pub trait ComponentBuilder {
    /// Create a component whose source is a remote git repository.
    async fn create_from_git(
        &self,
        name: &str,
        component_type: &str,
        url: &str,
        application: &str,
    ) -> Result<()>;

    /// Create a component whose source is a local path (directory or binary).
    async fn create_from_path(
        &self,
        name: &str,
        component_type: &str,
        path: &Path,
        application: &str,
        mode: PathMode,
    ) -> Result<()>;

    /// Trigger a build. `follow` streams build logs; `wait` blocks until the
    /// build completes.
    async fn build(&self, name: &str, application: &str, follow: bool, wait: bool) -> Result<()>;
}

/// Composite trait — any type implementing all three sub-traits is a `Platform`.
pub trait Platform: Catalog + ComponentQuery + ComponentBuilder {}

/// Blanket implementation: any type implementing all three sub-traits is a `Platform`.
impl<T> Platform for T where T: Catalog + ComponentQuery + ComponentBuilder {}

// ── Scope Ports ───────────────────────────────────────────────────────────────

/// Source of the active application name, creating a default on first use.
#[allow(async_fn_in_trait)]
pub trait ApplicationSource {
    /// Return the active application, creating and persisting a default
    /// when none is set yet.
    async fn current_or_create(&self) -> Result<String>;
}

/// Source of the current platform project (namespace).
#[allow(async_fn_in_trait)]
pub trait ProjectSource {
    async fn current_project(&self) -> Result<String>;
}

// ── Active-Component Tracker Port ─────────────────────────────────────────────

/// Persists and retrieves the active-component pointer per scope.
#[allow(async_fn_in_trait)]
pub trait CurrentTracker {
    /// Record `name` as the active component for `scope`, overwriting any
    /// previous pointer.
    async fn set_current(&self, name: &str, scope: &Scope) -> Result<()>;

    /// The active component for `scope`, or `None` when unset.
    async fn current(&self, scope: &Scope) -> Result<Option<String>>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Local filesystem seam so source resolution is testable without touching disk.
pub trait LocalFs {
    /// Turn `path` into an absolute path without requiring it to exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    fn absolutize(&self, path: &Path) -> Result<PathBuf>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
