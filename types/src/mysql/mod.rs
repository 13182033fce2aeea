//! MySQL type definitions
//!
//! This module provides the MySQL side of string-column mapping:
//!
//! - [`DialectLimits`] and the named length constants model authors reference
//! - [`MySqlStringType`] / [`TextTier`] - the VARCHAR and TEXT-family column types
//! - [`ddl`] - field descriptors and DDL entities with SQL generation

pub mod ddl;
mod limits;
mod sql_type;

pub use limits::{
    DEFAULT_STRING_LENGTH, DialectLimits, LONG_TEXT_LENGTH, MAX_INDEXABLE_VARCHAR_LENGTH,
    MAX_VARCHAR_LENGTH, MEDIUM_TEXT_LENGTH, TINY_TEXT_LENGTH,
};
pub use sql_type::{MySqlStringType, TextTier};
