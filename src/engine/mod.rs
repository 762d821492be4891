//! Stateful orchestration around the pure model: query history and the
//! per-document project.

pub mod project;
pub mod query;

pub use project::Project;
pub use query::QueryEngine;
