//! Application services — use-case orchestration over the port traits.

pub mod create;
pub mod current;
pub mod source;
