//! MySQL dialect rules for ddlkit
//!
//! - [`resolve_column_type`] - decides VARCHAR vs TEXT-family for a string field
//! - [`validate_index_request`] - rejects index/primary-key requests MySQL cannot
//!   honour without a key prefix, before anything reaches the server
//! - [`TableSchema`] / [`SchemaPlan`] - turn a table's fields into DDL and run it
//!   through a [`DdlExecutor`](ddlkit_core::DdlExecutor)
//! - [`DdlConfig`] - `ddlkit.toml` configuration
//!
//! # Example
//!
//! ```
//! use ddlkit_mysql::{resolve_and_validate, DdlConfig};
//! use ddlkit_types::mysql::ddl::FieldDescriptor;
//! use ddlkit_types::mysql::MEDIUM_TEXT_LENGTH;
//!
//! let config = DdlConfig::default();
//!
//! let body = FieldDescriptor::new("body").length(MEDIUM_TEXT_LENGTH);
//! let decision = resolve_and_validate(&body, &config.limits).unwrap();
//! assert_eq!(decision.sql_type_name(), "MEDIUMTEXT");
//!
//! let email = FieldDescriptor::new("email").length(256).unique();
//! assert!(resolve_and_validate(&email, &config.limits).is_err());
//! ```

mod config;
#[cfg(feature = "mysql-async")]
mod driver;
mod rules;
mod schema;
mod validate;

pub use config::{DdlConfig, TableOptions};
#[cfg(feature = "mysql-async")]
pub use driver::MySqlExecutor;
pub use rules::{ColumnTypeDecision, resolve_column_type};
pub use schema::{SchemaField, SchemaPlan, TableSchema};
pub use validate::{resolve_and_validate, validate_index_request};
