//! MySQL Index DDL types

use crate::alloc_prelude::*;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

use super::field::IndexKind;

/// Runtime index entity
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Index {
    /// Parent table name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub table: Cow<'static, str>,

    /// Index name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Indexed columns, in key order
    pub columns: Vec<Cow<'static, str>>,

    /// Is this a unique index?
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_unique: bool,
}

impl Index {
    /// Single-column index with the default name for its kind
    #[must_use]
    pub fn for_column(table: &str, column: &str, kind: IndexKind) -> Self {
        let name = match kind {
            IndexKind::Unique => super::name_for_unique(table, &[column]),
            IndexKind::NonUnique => super::name_for_index(table, &[column]),
        };
        Self {
            table: Cow::Owned(table.to_string()),
            name: Cow::Owned(name),
            columns: vec![Cow::Owned(column.to_string())],
            is_unique: matches!(kind, IndexKind::Unique),
        }
    }

    /// Get the index name
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
}
