//! Application service — component creation use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::{Context, Result};

use crate::application::ports::{
    CurrentTracker, LocalFs, PathMode, Platform, ProgressReporter,
};
use crate::application::services::source::resolve_source;
use crate::domain::error::ComponentError;
use crate::domain::name::validate_component_name;
use crate::domain::scope::Scope;
use crate::domain::source::{SourceDescriptor, SourceInput};

/// What the user asked for, after flag parsing and source pre-flight.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    /// Component type from the platform catalog (e.g. `nodejs`).
    pub component_type: String,
    /// Explicit component name; defaults to the type when absent.
    pub name: Option<String>,
    /// Exclusive raw source choice.
    pub source: SourceInput,
}

/// Successful creation outcome, suitable for confirmation messaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedComponent {
    pub name: String,
    pub source: SourceDescriptor,
}

/// Create a component and record it as the active one for `scope`.
///
/// Fail-fast sequence; the first error aborts the remaining steps and no
/// rollback is attempted:
/// 1. the requested type must exist in the catalog
/// 2. resolve identity — name defaults to the type, must be a valid label,
///    must not collide with an existing component in scope
/// 3. resolve the source descriptor (absolute paths, directory check)
/// 4. create + build with source-mode-specific parameters and narration
/// 5. record the component as active
///
/// Steps 1-3 run before any remote mutation. A failure in step 4 leaves
/// whatever partial state the platform holds (e.g. created but not built)
/// and skips step 5.
///
/// The existence checks in steps 1-2 are check-then-act with no
/// transactional guarantee; a concurrent external actor racing the create
/// is an accepted limitation of this single-operator tool.
///
/// # Errors
///
/// Returns an error for an unknown type, invalid or colliding name,
/// conflicting or invalid source, or any failed platform operation.
pub async fn create_component(
    platform: &impl Platform,
    tracker: &impl CurrentTracker,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    scope: &Scope,
    request: CreateRequest,
) -> Result<CreatedComponent> {
    // Step 1: the type must be known to the catalog.
    let known = platform
        .type_exists(&request.component_type)
        .await
        .context("checking component type against the catalog")?;
    if !known {
        return Err(ComponentError::UnknownType(request.component_type).into());
    }

    // Step 2: resolve identity. Creation must never silently overwrite.
    let name = request
        .name
        .unwrap_or_else(|| request.component_type.clone());
    validate_component_name(&name)?;
    let taken = platform
        .component_exists(&name, &scope.application, &scope.project)
        .await
        .context("checking for an existing component")?;
    if taken {
        return Err(ComponentError::AlreadyExists {
            name,
            application: scope.application.clone(),
        }
        .into());
    }

    // Step 3: resolve the source descriptor.
    let source = resolve_source(fs, request.source)?;

    // Step 4: create and build. Git builds are followed to completion; path
    // builds are triggered and left running while the logs stream.
    match &source {
        SourceDescriptor::Git(url) => {
            platform
                .create_from_git(&name, &request.component_type, url, &scope.application)
                .await
                .context("creating component from git source")?;
            reporter.success(&format!("Component '{name}' was created."));
            reporter.step(&format!("Triggering build from {url}."));
            platform
                .build(&name, &scope.application, true, true)
                .await
                .context("building component")?;
        }
        SourceDescriptor::Local(dir) => {
            reporter.step(&format!(
                "Creating component '{name}' from {}...",
                dir.display()
            ));
            platform
                .create_from_path(
                    &name,
                    &request.component_type,
                    dir,
                    &scope.application,
                    PathMode::Local,
                )
                .await
                .context("creating component from local source")?;
            platform
                .build(&name, &scope.application, true, false)
                .await
                .context("building component")?;
            reporter.success(&format!("Component '{name}' was created."));
        }
        SourceDescriptor::Binary(artifact) => {
            reporter.step(&format!(
                "Creating component '{name}' from binary {}...",
                artifact.display()
            ));
            platform
                .create_from_path(
                    &name,
                    &request.component_type,
                    artifact,
                    &scope.application,
                    PathMode::Binary,
                )
                .await
                .context("creating component from binary artifact")?;
            platform
                .build(&name, &scope.application, true, false)
                .await
                .context("building component")?;
            reporter.success(&format!("Component '{name}' was created."));
        }
    }

    // Step 5: the new component becomes the implicit target for later commands.
    tracker
        .set_current(&name, scope)
        .await
        .context("setting active component")?;

    Ok(CreatedComponent { name, source })
}
