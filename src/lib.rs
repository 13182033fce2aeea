//! # ddlkit
//!
//! MySQL string-column type resolution and DDL constraint rules.
//!
//! Given a string field's declared length, text hint and index requests, ddlkit
//! decides between `VARCHAR(n)`, `TINYTEXT`, `TEXT`, `MEDIUMTEXT` and `LONGTEXT`,
//! and refuses index or primary-key requests MySQL cannot honour without a
//! key-length prefix, before any statement reaches the server.
//!
//! ## Quick Start
//!
//! ```rust
//! use ddlkit::prelude::*;
//!
//! # fn main() -> ddlkit::Result<()> {
//! let schema = TableSchema::new("posts")
//!     .column(ColumnDef::new("posts", "id", "INT").primary_key().autoincrement())
//!     .string(FieldDescriptor::new("slug").length(120).unique())
//!     .string(FieldDescriptor::new("body").length(MEDIUM_TEXT_LENGTH));
//!
//! let plan = schema.plan(&DdlConfig::default())?;
//! assert_eq!(plan.decision("body").unwrap().sql_type_name(), "MEDIUMTEXT");
//!
//! let too_long = TableSchema::new("posts")
//!     .string(FieldDescriptor::new("slug").length(256).unique());
//! assert!(too_long.plan(&DdlConfig::default()).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature       | Enables                                             |
//! |---------------|-----------------------------------------------------|
//! | `mysql`       | rule engine, validator and schema driver (default)  |
//! | `mysql-async` | [`mysql::MySqlExecutor`] over `mysql_async`         |
//! | `serde`       | serde support for the DDL types                     |
//! | `tracing`     | `tracing` events for resolution and executed DDL    |

/// Result type for ddlkit operations
pub use ddlkit_core::error::Result;

/// The executor seam to a live database
pub use ddlkit_core::DdlExecutor;

/// Error types
pub mod error {
    pub use ddlkit_core::error::{
        ConfigError, ConstraintViolation, DdlError, IndexRequest, ViolationReason,
    };
}

/// Dialect constants, string column types and DDL entities.
pub use ddlkit_types as types;

/// MySQL rule engine, validator and schema driver.
#[cfg(feature = "mysql")]
pub mod mysql {
    pub use ddlkit_mysql::*;
    pub use ddlkit_types::mysql::*;
}

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::DdlExecutor;
    pub use crate::error::{ConstraintViolation, DdlError};
    pub use ddlkit_types::mysql::ddl::{ColumnDef, FieldDescriptor, IndexKind};
    pub use ddlkit_types::mysql::{
        DEFAULT_STRING_LENGTH, DialectLimits, LONG_TEXT_LENGTH, MAX_INDEXABLE_VARCHAR_LENGTH,
        MEDIUM_TEXT_LENGTH, MySqlStringType, TINY_TEXT_LENGTH, TextTier,
    };

    #[cfg(feature = "mysql")]
    pub use ddlkit_mysql::{
        ColumnTypeDecision, DdlConfig, SchemaPlan, TableSchema, resolve_and_validate,
        resolve_column_type, validate_index_request,
    };
}
