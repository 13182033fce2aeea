//! The seam between DDL planning and a live database connection.

use core::future::Future;

/// Something that can run a single DDL statement.
///
/// Implemented for driver connections (see `ddlkit-mysql`'s `mysql-async`
/// feature) and for in-memory recorders in tests. Errors are returned exactly as
/// the driver produced them; callers wrap them in
/// [`DdlError::EngineRejection`](crate::error::DdlError::EngineRejection).
pub trait DdlExecutor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute one statement, discarding any result set
    fn execute(&mut self, sql: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
