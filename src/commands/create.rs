//! `loft create` — create a component and set it active.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::create::{self as service, CreateRequest};
use crate::domain::source::SourceInput;
use crate::infra::fs::StdFs;

/// Arguments for the create command.
#[derive(Args, Default)]
pub struct CreateArgs {
    /// Component type from the platform catalog (e.g. nodejs, php)
    pub component_type: String,

    /// Component name; defaults to the component type
    pub name: Option<String>,

    /// Git repository URL to build from
    #[arg(long, value_name = "URL")]
    pub git: Option<String>,

    /// Local source directory (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub local: Option<String>,

    /// Prebuilt binary artifact
    #[arg(long, value_name = "PATH")]
    pub binary: Option<String>,
}

/// Run `loft create`.
///
/// # Errors
///
/// Returns an error for conflicting source flags, an unknown type, an
/// invalid or colliding name, or a failed create/build.
pub async fn run(args: &CreateArgs, app: &AppContext) -> Result<()> {
    // Source exclusivity is a pure user-input check; it runs before scope
    // resolution or any platform call.
    let source = SourceInput::from_flags(
        args.binary.as_deref(),
        args.git.as_deref(),
        args.local.as_deref(),
    )?;

    let scope = app.resolve_scope().await?;
    let reporter = app.terminal_reporter();

    let created = service::create_component(
        &app.platform,
        &app.state,
        &StdFs,
        &reporter,
        &scope,
        CreateRequest {
            component_type: args.component_type.clone(),
            name: args.name.clone(),
            source,
        },
    )
    .await?;

    app.output.success(&format!(
        "Component '{}' ({} source) is now set as the active component.",
        created.name,
        created.source.mode()
    ));
    Ok(())
}
