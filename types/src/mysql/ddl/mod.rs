//! MySQL DDL (Data Definition Language) entity types
//!
//! As in the other dialect modules, entities come in two flavours:
//!
//! - **`*Def` types** - const-friendly definitions using only `Copy` types
//! - **Runtime types** - `Cow<'static, str>` based, serde-capable
//!
//! [`FieldDescriptor`] is the input to the string-column rule engine; [`Column`],
//! [`Index`] and [`Table`] are what the schema driver renders with [`TableSql`].
//!
//! # Examples
//!
//! ```
//! use ddlkit_types::mysql::ddl::{Column, ColumnDef, TableDef, TableSql};
//!
//! let table = TableDef::new("notes").into_table();
//! let columns = [
//!     ColumnDef::new("notes", "id", "INT").primary_key().autoincrement().into_column(),
//!     Column::new("notes", "body", "MEDIUMTEXT"),
//! ];
//!
//! let sql = TableSql::new(&table).columns(&columns).create_table_sql();
//! assert!(sql.starts_with("CREATE TABLE `notes`"));
//! ```

use crate::alloc_prelude::*;

mod column;
mod field;
mod index;
pub mod sql;
mod table;

// Const-friendly definition types
pub use column::ColumnDef;
pub use field::{FieldDescriptor, IndexKind};
pub use table::TableDef;

// Runtime types
pub use column::Column;
pub use index::Index;
pub use table::Table;

// SQL generation
pub use sql::{TableSql, quote_ident};

#[cfg(feature = "serde")]
pub use crate::serde_helpers::{cow_from_string, cow_option_from_string};

// =============================================================================
// Naming Helpers
// =============================================================================

/// Generate a default name for a unique index
#[must_use]
pub fn name_for_unique(table: &str, columns: &[&str]) -> String {
    format!("{}_{}_unique", table, columns.join("_"))
}

/// Generate a default name for a non-unique index
#[must_use]
pub fn name_for_index(table: &str, columns: &[&str]) -> String {
    format!("{}_{}_idx", table, columns.join("_"))
}
