//! Tracing utilities for DDL resolution and execution.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the calling crate's feature is disabled, avoiding
//! `#[cfg]` boilerplate at every call site.

/// Emit a trace-level event for one string-column resolution.
///
/// ```ignore
/// ddlkit_trace_resolve!(field.name, &decision.sql_type, decision.is_indexable);
/// ```
#[macro_export]
macro_rules! ddlkit_trace_resolve {
    ($field:expr, $sql_type:expr, $indexable:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            field = %$field,
            sql_type = %$sql_type,
            indexable = $indexable,
            "ddlkit.resolve"
        );
    };
}

/// Emit a debug-level event with the DDL statement about to be executed.
///
/// ```ignore
/// ddlkit_trace_ddl!(&statement);
/// ```
#[macro_export]
macro_rules! ddlkit_trace_ddl {
    ($sql:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, "ddlkit.ddl");
    };
}

/// Emit a warn-level event.
///
/// ```ignore
/// ddlkit_warn!(field = name, "VARCHAR exceeds the engine ceiling");
/// ```
#[macro_export]
macro_rules! ddlkit_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)+);
    };
}
