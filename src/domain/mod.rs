//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod name;
pub mod scope;
pub mod source;

pub use error::{ComponentError, NameError, SourceError};
pub use name::validate_component_name;
pub use scope::Scope;
pub use source::{SourceDescriptor, SourceInput};
