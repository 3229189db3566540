//! The (application, project) pair that namespaces component identity.

/// Ambient scope for a single invocation.
///
/// Resolved once at the entry point (application from local state, project
/// from the platform) and passed read-only through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Active application name.
    pub application: String,
    /// Current platform project (namespace).
    pub project: String,
}

impl Scope {
    #[must_use]
    pub fn new(application: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            application: application.into(),
            project: project.into(),
        }
    }

    /// Key used for the active-component map in the local state file.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}/{}", self.application, self.project)
    }
}
