//! Shared mock infrastructure for unit tests.
//!
//! Provides recording [`Platform`], tracker, filesystem, and reporter doubles
//! so each test file doesn't have to re-define the same boilerplate.

#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not every test file uses every helper

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use loft_cli::application::ports::{
    Catalog, ComponentBuilder, ComponentQuery, CurrentTracker, LocalFs, PathMode,
    ProgressReporter,
};
use loft_cli::domain::Scope;

// ── Recording platform ────────────────────────────────────────────────────────

/// One observed platform call, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    TypeExists(String),
    ComponentExists(String),
    CreateFromGit {
        name: String,
        component_type: String,
        url: String,
        application: String,
    },
    CreateFromPath {
        name: String,
        component_type: String,
        path: PathBuf,
        application: String,
        mode: &'static str,
    },
    Build {
        name: String,
        application: String,
        follow: bool,
        wait: bool,
    },
}

impl PlatformCall {
    /// Whether the call mutates remote state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            PlatformCall::CreateFromGit { .. }
                | PlatformCall::CreateFromPath { .. }
                | PlatformCall::Build { .. }
        )
    }
}

/// Records every platform call; catalog membership and existing component
/// names are configured up front.
pub struct RecordingPlatform {
    catalog: Vec<String>,
    existing: Vec<String>,
    fail_create: bool,
    fail_build: bool,
    calls: Mutex<Vec<PlatformCall>>,
}

impl RecordingPlatform {
    pub fn with_types(types: &[&str]) -> Self {
        Self {
            catalog: types.iter().map(ToString::to_string).collect(),
            existing: Vec::new(),
            fail_create: false,
            fail_build: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mark `name` as an already-existing component in every scope.
    #[must_use]
    pub fn with_existing(mut self, name: &str) -> Self {
        self.existing.push(name.to_string());
        self
    }

    #[must_use]
    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    #[must_use]
    pub fn failing_build(mut self) -> Self {
        self.fail_build = true;
        self
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.calls().iter().filter(|c| c.is_mutation()).count()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().expect("lock").push(call);
    }
}

impl Catalog for RecordingPlatform {
    async fn type_exists(&self, component_type: &str) -> Result<bool> {
        self.record(PlatformCall::TypeExists(component_type.to_string()));
        Ok(self.catalog.iter().any(|t| t == component_type))
    }
}

impl ComponentQuery for RecordingPlatform {
    async fn component_exists(&self, name: &str, _: &str, _: &str) -> Result<bool> {
        self.record(PlatformCall::ComponentExists(name.to_string()));
        Ok(self.existing.iter().any(|n| n == name))
    }
}

impl ComponentBuilder for RecordingPlatform {
    async fn create_from_git(
        &self,
        name: &str,
        component_type: &str,
        url: &str,
        application: &str,
    ) -> Result<()> {
        self.record(PlatformCall::CreateFromGit {
            name: name.to_string(),
            component_type: component_type.to_string(),
            url: url.to_string(),
            application: application.to_string(),
        });
        if self.fail_create {
            anyhow::bail!("simulated create failure");
        }
        Ok(())
    }

    async fn create_from_path(
        &self,
        name: &str,
        component_type: &str,
        path: &Path,
        application: &str,
        mode: PathMode,
    ) -> Result<()> {
        self.record(PlatformCall::CreateFromPath {
            name: name.to_string(),
            component_type: component_type.to_string(),
            path: path.to_path_buf(),
            application: application.to_string(),
            mode: mode.as_str(),
        });
        if self.fail_create {
            anyhow::bail!("simulated create failure");
        }
        Ok(())
    }

    async fn build(&self, name: &str, application: &str, follow: bool, wait: bool) -> Result<()> {
        self.record(PlatformCall::Build {
            name: name.to_string(),
            application: application.to_string(),
            follow,
            wait,
        });
        if self.fail_build {
            anyhow::bail!("simulated build failure");
        }
        Ok(())
    }
}

// ── In-memory tracker ─────────────────────────────────────────────────────────

/// In-memory active-component tracker with call counting.
pub struct MemoryTracker {
    entries: Mutex<HashMap<String, String>>,
    set_calls: Mutex<u32>,
}

impl MemoryTracker {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            set_calls: Mutex::new(0),
        }
    }

    pub fn set_count(&self) -> u32 {
        *self.set_calls.lock().expect("lock")
    }
}

impl CurrentTracker for MemoryTracker {
    async fn set_current(&self, name: &str, scope: &Scope) -> Result<()> {
        *self.set_calls.lock().expect("lock") += 1;
        self.entries
            .lock()
            .expect("lock")
            .insert(scope.key(), name.to_string());
        Ok(())
    }

    async fn current(&self, scope: &Scope) -> Result<Option<String>> {
        Ok(self.entries.lock().expect("lock").get(&scope.key()).cloned())
    }
}

// ── Fake filesystem ───────────────────────────────────────────────────────────

/// Deterministic in-memory filesystem: a fixed working directory plus a set
/// of paths that count as directories.
pub struct FakeFs {
    cwd: PathBuf,
    dirs: Vec<PathBuf>,
}

impl FakeFs {
    /// A fake filesystem rooted at `cwd`; the working directory itself is a
    /// directory.
    pub fn new(cwd: &str) -> Self {
        Self {
            cwd: PathBuf::from(cwd),
            dirs: vec![PathBuf::from(cwd)],
        }
    }

    #[must_use]
    pub fn with_dir(mut self, path: &str) -> Self {
        self.dirs.push(PathBuf::from(path));
        self
    }
}

impl LocalFs for FakeFs {
    fn absolutize(&self, path: &Path) -> Result<PathBuf> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        };
        Ok(joined
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.iter().any(|d| d == path)
    }
}

// ── Reporters ─────────────────────────────────────────────────────────────────

pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}

/// Records every message handed to the reporter.
pub struct RecordingReporter {
    pub steps: Mutex<Vec<String>>,
    pub successes: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self {
            steps: Mutex::new(Vec::new()),
            successes: Mutex::new(Vec::new()),
        }
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.steps.lock().expect("lock").push(message.to_string());
    }
    fn success(&self, message: &str) {
        self.successes
            .lock()
            .expect("lock")
            .push(message.to_string());
    }
    fn warn(&self, _: &str) {}
}

// ── Scope fixture ─────────────────────────────────────────────────────────────

pub fn test_scope() -> Scope {
    Scope::new("app", "myproject")
}
