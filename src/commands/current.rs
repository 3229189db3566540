//! `loft current` — show the active component for the current scope.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::current::active_component;

/// Run `loft current`.
///
/// # Errors
///
/// Returns an error if the scope cannot be resolved or no component is set.
pub async fn run(app: &AppContext) -> Result<()> {
    let scope = app.resolve_scope().await?;
    let name = active_component(&app.state, &scope).await?;

    app.output.kv("Application", &scope.application);
    app.output.kv("Project", &scope.project);
    app.output.kv("Component", &name);
    Ok(())
}
