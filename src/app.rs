//! Application context — unified state passed to every command handler.
//!
//! `AppContext` replaces the per-command pattern of constructing loose
//! `OutputContext`, `OcClient`, and `StateManager` instances. Adding a new
//! cross-cutting concern requires only one field change here — zero command
//! signatures change.

use anyhow::{Context, Result};

use crate::application::ports::{ApplicationSource as _, ProjectSource as _};
use crate::domain::scope::Scope;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::platform::OcClient;
use crate::infra::state::StateManager;
use crate::output::{OutputContext, TerminalReporter};

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext` to all
/// command handlers.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Platform client backed by the `oc` CLI.
    pub platform: OcClient<TokioCommandRunner>,
    /// Local state — active application and component pointers.
    pub state: StateManager,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if `StateManager::new()` fails (home directory not found).
    pub fn new(no_color: bool, quiet: bool) -> Result<Self> {
        Ok(Self {
            output: OutputContext::new(no_color, quiet),
            platform: OcClient::default_runner(),
            state: StateManager::new()?,
        })
    }

    /// Progress reporter bound to this context's output settings.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Resolve the ambient scope once for this invocation.
    ///
    /// The application comes from local state (created with a default on
    /// first use); the project comes from the platform.
    ///
    /// # Errors
    ///
    /// Returns an error if either source fails.
    pub async fn resolve_scope(&self) -> Result<Scope> {
        let application = self
            .state
            .current_or_create()
            .await
            .context("resolving the active application")?;
        let project = self
            .platform
            .current_project()
            .await
            .context("resolving the current project")?;
        Ok(Scope::new(application, project))
    }
}
