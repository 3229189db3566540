//! Local state persistence — active application and component pointers.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ApplicationSource, CurrentTracker};
use crate::domain::scope::Scope;

/// Application created and activated when none is set yet.
pub const DEFAULT_APPLICATION: &str = "app";

/// State persisted to `~/.loft/state.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliState {
    /// Active application, created on first use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    /// Active component per `application/project` scope key.
    #[serde(default)]
    pub components: HashMap<String, String>,
    /// When the state file was last written.
    pub updated_at: DateTime<Utc>,
}

impl CliState {
    fn empty() -> Self {
        Self {
            application: None,
            components: HashMap::new(),
            updated_at: Utc::now(),
        }
    }
}

/// State file manager.
pub struct StateManager {
    path: PathBuf,
}

impl StateManager {
    /// Create a state manager using the default path (`~/.loft/state.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
        Ok(Self::with_path(home.join(".loft").join("state.json")))
    }

    /// Create a state manager with an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load existing state, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<CliState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading state file {}", self.path.display()))?;
        let state: CliState = serde_json::from_str(&content)
            .with_context(|| format!("parsing state file {}", self.path.display()))?;
        Ok(Some(state))
    }

    /// Save state to disk with mode 600.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save(&self, state: &CliState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(state).context("serializing state")?;
        std::fs::write(&self.path, &content)
            .with_context(|| format!("writing state file {}", self.path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("setting permissions on {}", self.path.display()))?;
        }
        Ok(())
    }

    fn load_or_empty(&self) -> Result<CliState> {
        Ok(self.load()?.unwrap_or_else(CliState::empty))
    }
}

impl CurrentTracker for StateManager {
    async fn set_current(&self, name: &str, scope: &Scope) -> Result<()> {
        let mut state = self.load_or_empty()?;
        state.components.insert(scope.key(), name.to_string());
        state.updated_at = Utc::now();
        self.save(&state)
    }

    async fn current(&self, scope: &Scope) -> Result<Option<String>> {
        Ok(self
            .load()?
            .and_then(|s| s.components.get(&scope.key()).cloned()))
    }
}

impl ApplicationSource for StateManager {
    async fn current_or_create(&self) -> Result<String> {
        let mut state = self.load_or_empty()?;
        if let Some(application) = state.application {
            return Ok(application);
        }
        state.application = Some(DEFAULT_APPLICATION.to_string());
        state.updated_at = Utc::now();
        self.save(&state)?;
        Ok(DEFAULT_APPLICATION.to_string())
    }
}
