//! String field descriptors
//!
//! A [`FieldDescriptor`] is what model introspection hands to the rule engine:
//! the declared length, the text hint and the index requests of one string field.

use crate::mysql::TextTier;

/// Index requested on a single column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IndexKind {
    /// UNIQUE index
    Unique,
    /// Plain (non-unique) index
    NonUnique,
}

impl IndexKind {
    /// Human readable label used in diagnostics
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unique => "unique index",
            Self::NonUnique => "index",
        }
    }
}

/// Const-friendly description of one persisted string field.
///
/// # Examples
///
/// ```
/// use ddlkit_types::mysql::ddl::{FieldDescriptor, IndexKind};
/// use ddlkit_types::mysql::TextTier;
///
/// const EMAIL: FieldDescriptor = FieldDescriptor::new("email").length(120).unique();
/// const BODY: FieldDescriptor = FieldDescriptor::new("body").text_tier(TextTier::Medium);
///
/// assert_eq!(EMAIL.explicit_length, Some(120));
/// assert_eq!(EMAIL.index, Some(IndexKind::Unique));
/// assert!(EMAIL.requests_index());
/// assert!(!BODY.requests_index());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FieldDescriptor {
    /// Field (column) name, unique within its table
    pub name: &'static str,
    /// Declared length; `None` means the dialect default
    #[cfg_attr(feature = "serde", serde(default))]
    pub explicit_length: Option<u32>,
    /// Field is marked as unbounded text rather than a bounded string
    #[cfg_attr(feature = "serde", serde(default))]
    pub unbounded_text: bool,
    /// Field is the table's primary key
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary_key: bool,
    /// Index requested on the field
    #[cfg_attr(feature = "serde", serde(default))]
    pub index: Option<IndexKind>,
    /// Is this column NOT NULL?
    #[cfg_attr(feature = "serde", serde(default))]
    pub not_null: bool,
}

impl FieldDescriptor {
    /// Create a descriptor with no length, hint or index
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            explicit_length: None,
            unbounded_text: false,
            primary_key: false,
            index: None,
            not_null: false,
        }
    }

    /// Set an explicit length. Zero is treated as "no length".
    #[must_use]
    pub const fn length(self, length: u32) -> Self {
        Self {
            explicit_length: if length == 0 { None } else { Some(length) },
            ..self
        }
    }

    /// Mark the field as unbounded text
    #[must_use]
    pub const fn text(self) -> Self {
        Self {
            unbounded_text: true,
            ..self
        }
    }

    /// Select a TEXT tier explicitly.
    ///
    /// Tiers with a named length store it as the explicit length, so this and
    /// `.length(MEDIUM_TEXT_LENGTH)` describe the same field.
    #[must_use]
    pub const fn text_tier(self, tier: TextTier) -> Self {
        Self {
            explicit_length: tier.sentinel_length(),
            unbounded_text: true,
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

    /// Request a UNIQUE index
    #[must_use]
    pub const fn unique(self) -> Self {
        Self {
            index: Some(IndexKind::Unique),
            ..self
        }
    }

    /// Request a non-unique index
    #[must_use]
    pub const fn indexed(self) -> Self {
        Self {
            index: Some(IndexKind::NonUnique),
            ..self
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

    /// Whether the field asks for a primary key or any index
    #[inline]
    #[must_use]
    pub const fn requests_index(&self) -> bool {
        self.primary_key || self.index.is_some()
    }
}
