//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution,
//! filesystem access, the platform CLI adapter, and state persistence.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod fs;
pub mod platform;
pub mod state;

pub use command_runner::{CommandRunner, TokioCommandRunner};
pub use fs::StdFs;
pub use platform::OcClient;
pub use state::StateManager;
