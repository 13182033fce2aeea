//! MySQL string column type definitions
//!
//! Defines the VARCHAR / TEXT-family types a string field can resolve to.

use super::limits::{LONG_TEXT_LENGTH, MEDIUM_TEXT_LENGTH, TINY_TEXT_LENGTH};

/// One tier of the MySQL TEXT family.
///
/// None of the tiers can be indexed without an explicit key-length prefix.
/// See: <https://dev.mysql.com/doc/refman/8.0/en/blob.html>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextTier {
    /// TINYTEXT - up to 255 bytes
    Tiny,
    /// TEXT - up to 64 KiB
    Regular,
    /// MEDIUMTEXT - up to 16 MiB
    Medium,
    /// LONGTEXT - up to 4 GiB
    Long,
}

impl TextTier {
    /// SQL keyword for this tier
    #[must_use]
    pub const fn to_sql_type(&self) -> &'static str {
        match self {
            Self::Tiny => "TINYTEXT",
            Self::Regular => "TEXT",
            Self::Medium => "MEDIUMTEXT",
            Self::Long => "LONGTEXT",
        }
    }

    /// Named length that selects this tier, if it has one.
    ///
    /// Plain `TEXT` has no sentinel; it is reached through the unbounded-text hint.
    #[must_use]
    pub const fn sentinel_length(&self) -> Option<u32> {
        match self {
            Self::Tiny => Some(TINY_TEXT_LENGTH),
            Self::Regular => None,
            Self::Medium => Some(MEDIUM_TEXT_LENGTH),
            Self::Long => Some(LONG_TEXT_LENGTH),
        }
    }
}

impl core::fmt::Display for TextTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.to_sql_type())
    }
}

/// Resolved MySQL type of a string column.
///
/// # Examples
///
/// ```
/// use ddlkit_types::mysql::{MySqlStringType, TextTier};
///
/// assert_eq!(MySqlStringType::Varchar(255).to_string(), "VARCHAR(255)");
/// assert_eq!(MySqlStringType::Text(TextTier::Medium).to_string(), "MEDIUMTEXT");
/// assert_eq!(MySqlStringType::Varchar(64).varchar_length(), Some(64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MySqlStringType {
    /// VARCHAR(n) - variable-length string with a character limit
    ///
    /// See: <https://dev.mysql.com/doc/refman/8.0/en/char.html>
    Varchar(u32),

    /// One of TINYTEXT / TEXT / MEDIUMTEXT / LONGTEXT
    Text(TextTier),
}

impl MySqlStringType {
    /// Length of a VARCHAR, `None` for the TEXT family
    #[must_use]
    pub const fn varchar_length(&self) -> Option<u32> {
        match self {
            Self::Varchar(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl core::fmt::Display for MySqlStringType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Varchar(n) => write!(f, "VARCHAR({n})"),
            Self::Text(tier) => f.write_str(tier.to_sql_type()),
        }
    }
}
