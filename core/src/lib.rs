//! Core plumbing shared by the ddlkit dialect crates: the error taxonomy,
//! tracing macros, and the [`DdlExecutor`] seam to the database driver.

pub mod error;
mod executor;
mod tracing;

pub use error::{ConfigError, ConstraintViolation, DdlError, IndexRequest, Result, ViolationReason};
pub use executor::DdlExecutor;
