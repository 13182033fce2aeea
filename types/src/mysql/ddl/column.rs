//! MySQL Column DDL types
//!
//! This module provides two complementary types:
//! - [`ColumnDef`] - A const-friendly definition type for compile-time schema definitions
//! - [`Column`] - A runtime type for serde serialization/deserialization

use crate::alloc_prelude::*;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

// =============================================================================
// Const-friendly Definition Type
// =============================================================================

/// Const-friendly column definition for pre-typed (non-string) columns.
///
/// # Examples
///
/// ```
/// use ddlkit_types::mysql::ddl::ColumnDef;
///
/// const ID: ColumnDef = ColumnDef::new("notes", "id", "INT")
///     .primary_key()
///     .autoincrement();
///
/// assert!(ID.not_null);
/// assert!(ID.autoincrement);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnDef {
    /// Parent table name
    pub table: &'static str,
    /// Column name
    pub name: &'static str,
    /// SQL type (e.g., "INT", "BIGINT", "DATETIME")
    pub sql_type: &'static str,
    /// Is this column NOT NULL?
    pub not_null: bool,
    /// Is this column AUTO_INCREMENT?
    pub autoincrement: bool,
    /// Is this column a PRIMARY KEY?
    pub primary_key: bool,
}

impl ColumnDef {
    /// Create a new column definition
    #[must_use]
    pub const fn new(table: &'static str, name: &'static str, sql_type: &'static str) -> Self {
        Self {
            table,
            name,
            sql_type,
            not_null: false,
            autoincrement: false,
            primary_key: false,
        }
    }

    /// Set NOT NULL constraint
    #[must_use]
    pub const fn not_null(self) -> Self {
        Self {
            not_null: true,
            ..self
        }
    }

    /// Set AUTO_INCREMENT
    #[must_use]
    pub const fn autoincrement(self) -> Self {
        Self {
            autoincrement: true,
            ..self
        }
    }

    /// Set PRIMARY KEY (also sets NOT NULL)
    #[must_use]
    pub const fn primary_key(self) -> Self {
        Self {
            primary_key: true,
            not_null: true,
            ..self
        }
    }

    /// Convert to runtime [`Column`] type
    #[must_use]
    pub const fn into_column(self) -> Column {
        Column {
            table: Cow::Borrowed(self.table),
            name: Cow::Borrowed(self.name),
            sql_type: Cow::Borrowed(self.sql_type),
            not_null: self.not_null,
            autoincrement: if self.autoincrement { Some(true) } else { None },
            primary_key: if self.primary_key { Some(true) } else { None },
        }
    }
}

// =============================================================================
// Runtime Type for Serde
// =============================================================================

/// Runtime column entity, the unit the CREATE TABLE generator works on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Column {
    /// Parent table name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub table: Cow<'static, str>,

    /// Column name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// SQL type (e.g., "VARCHAR(255)", "MEDIUMTEXT", "INT")
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", deserialize_with = "cow_from_string")
    )]
    pub sql_type: Cow<'static, str>,

    /// Is this column NOT NULL?
    #[cfg_attr(feature = "serde", serde(default))]
    pub not_null: bool,

    /// Is this column AUTO_INCREMENT?
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub autoincrement: Option<bool>,

    /// Is this column a PRIMARY KEY?
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub primary_key: Option<bool>,
}

impl Column {
    /// Create a new column (runtime)
    #[must_use]
    pub fn new(
        table: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        sql_type: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
            sql_type: sql_type.into(),
            not_null: false,
            autoincrement: None,
            primary_key: None,
        }
    }

    /// Set NOT NULL
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Set PRIMARY KEY (also sets NOT NULL)
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = Some(true);
        self.not_null = true;
        self
    }

    /// Get the column name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the table name
    #[inline]
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Get the SQL type
    #[inline]
    #[must_use]
    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    /// Check if this is a primary key column
    #[inline]
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key.unwrap_or(false)
    }

    /// Check if this is an autoincrement column
    #[inline]
    #[must_use]
    pub fn is_autoincrement(&self) -> bool {
        self.autoincrement.unwrap_or(false)
    }
}

impl From<ColumnDef> for Column {
    fn from(def: ColumnDef) -> Self {
        def.into_column()
    }
}
