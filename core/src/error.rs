use ddlkit_types::mysql::MySqlStringType;
use ddlkit_types::mysql::ddl::IndexKind;
use thiserror::Error;

/// Why a constraint request was refused locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationReason {
    /// The column type or length cannot carry an index without a key-length prefix
    UnindexableColumnTypeOrLength,
}

impl ViolationReason {
    /// Stable machine-readable code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnindexableColumnTypeOrLength => "unindexable-column-type-or-length",
        }
    }
}

impl core::fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which request on a column was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexRequest {
    /// PRIMARY KEY on the column
    PrimaryKey,
    /// Secondary index, unique or not
    Index(IndexKind),
}

impl core::fmt::Display for IndexRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PrimaryKey => f.write_str("primary key"),
            Self::Index(kind) => f.write_str(kind.as_str()),
        }
    }
}

/// An index, unique or primary-key request on a column MySQL cannot index as declared.
///
/// Raised before any statement reaches the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot create {request} on `{field}` {sql_type}: {reason}")]
pub struct ConstraintViolation {
    /// Offending field
    pub field: String,
    /// Type the field resolved to
    pub sql_type: MySqlStringType,
    /// What was asked for
    pub request: IndexRequest,
    /// Why it was refused
    pub reason: ViolationReason,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("IO error: {0}")]
    IoError(String),
    /// The config is not valid TOML or its values contradict each other
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Errors returned by schema planning and execution
#[derive(Debug, Error)]
pub enum DdlError {
    /// A constraint request the dialect cannot honour, detected locally
    #[error(transparent)]
    ConstraintViolation(#[from] ConstraintViolation),

    /// The database refused a statement; the driver error is kept as-is
    #[error(transparent)]
    EngineRejection(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Malformed table schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DdlError {
    /// Wrap an error returned by the database driver
    pub fn engine<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::EngineRejection(Box::new(err))
    }

    /// The locally detected violation, if that is what this is
    #[must_use]
    pub fn as_constraint_violation(&self) -> Option<&ConstraintViolation> {
        match self {
            Self::ConstraintViolation(v) => Some(v),
            _ => None,
        }
    }
}

/// Result type for DDL operations
pub type Result<T> = std::result::Result<T, DdlError>;
