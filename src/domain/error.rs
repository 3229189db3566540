//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator. Remote-operation failures are not enumerated here;
//! they are wrapped with per-step `anyhow::Context` where they occur.

use thiserror::Error;

// ── Name errors ───────────────────────────────────────────────────────────────

/// Errors from component-name validation.
#[derive(Debug, Error)]
pub enum NameError {
    /// `violations` lists every broken naming rule, `; `-joined.
    #[error("'{name}' is not a valid component name: {violations}")]
    Invalid { name: String, violations: String },
}

// ── Source errors ─────────────────────────────────────────────────────────────

/// Errors from source-mode resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("The source can be either --binary or --local or --git; pass at most one.")]
    ConflictingSources,

    #[error("Local source '{0}' is not a directory. Please provide a path to a directory.")]
    NotADirectory(String),
}

// ── Component errors ──────────────────────────────────────────────────────────

/// Errors related to component identity and catalog membership.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("Unknown component type '{0}'. It is not present in the platform catalog.")]
    UnknownType(String),

    #[error("Component '{name}' already exists in application '{application}'.")]
    AlreadyExists { name: String, application: String },

    #[error("No component is set as active. Create one with 'loft create <type>'.")]
    NoneActive,
}
