//! MySQL Table DDL types
//!
//! - [`TableDef`] - const-friendly definition
//! - [`Table`] - runtime type with owned options

use crate::alloc_prelude::*;

#[cfg(feature = "serde")]
use crate::serde_helpers::{cow_from_string, cow_option_from_string};

/// Const-friendly table definition
///
/// # Examples
///
/// ```
/// use ddlkit_types::mysql::ddl::TableDef;
///
/// const NOTES: TableDef = TableDef::new("notes").engine("InnoDB").charset("utf8mb4");
/// assert_eq!(NOTES.name, "notes");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableDef {
    /// Table name
    pub name: &'static str,
    /// Storage engine (ENGINE=...)
    pub engine: Option<&'static str>,
    /// Default character set (DEFAULT CHARSET=...)
    pub charset: Option<&'static str>,
}

impl TableDef {
    /// Create a new table definition
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            engine: None,
            charset: None,
        }
    }

    /// Set the storage engine
    #[must_use]
    pub const fn engine(self, engine: &'static str) -> Self {
        Self {
            engine: Some(engine),
            ..self
        }
    }

    /// Set the default character set
    #[must_use]
    pub const fn charset(self, charset: &'static str) -> Self {
        Self {
            charset: Some(charset),
            ..self
        }
    }

    /// Convert to runtime [`Table`] type
    #[must_use]
    pub const fn into_table(self) -> Table {
        Table {
            name: Cow::Borrowed(self.name),
            engine: match self.engine {
                Some(e) => Some(Cow::Borrowed(e)),
                None => None,
            },
            charset: match self.charset {
                Some(c) => Some(Cow::Borrowed(c)),
                None => None,
            },
        }
    }
}

/// Runtime table entity
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Table {
    /// Table name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Storage engine
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "cow_option_from_string")
    )]
    pub engine: Option<Cow<'static, str>>,

    /// Default character set
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "cow_option_from_string")
    )]
    pub charset: Option<Cow<'static, str>>,
}

impl Table {
    /// Create a new table (runtime)
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            engine: None,
            charset: None,
        }
    }

    /// Get the table name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<TableDef> for Table {
    fn from(def: TableDef) -> Self {
        def.into_table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_into_table() {
        const TABLE: Table = TableDef::new("notes").engine("InnoDB").into_table();
        assert_eq!(TABLE.name(), "notes");
        assert_eq!(TABLE.engine.as_deref(), Some("InnoDB"));
        assert_eq!(TABLE.charset, None);
    }
}
