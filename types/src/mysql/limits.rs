//! MySQL dialect limits
//!
//! Named, process-wide constants describing how MySQL treats string columns.
//! Model authors reference these directly, e.g. a field declared with
//! [`MEDIUM_TEXT_LENGTH`] is read as a request for the `MEDIUMTEXT` tier.

use super::TextTier;

/// VARCHAR length used when a string field gives no explicit length.
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// Longest VARCHAR that can carry a unique/non-unique index without a key prefix.
pub const MAX_INDEXABLE_VARCHAR_LENGTH: u32 = 255;

/// Hard VARCHAR ceiling of the engine (65,535 bytes per row).
///
/// Informational only: resolution never caps a requested length.
pub const MAX_VARCHAR_LENGTH: u32 = 65_535;

/// Named length selecting `TINYTEXT`.
///
/// Sits one past [`MAX_VARCHAR_LENGTH`] so it never shadows a VARCHAR the
/// engine could actually create.
pub const TINY_TEXT_LENGTH: u32 = MAX_VARCHAR_LENGTH + 1;

/// Named length selecting `MEDIUMTEXT` (its byte capacity, 2^24 - 1).
pub const MEDIUM_TEXT_LENGTH: u32 = 16_777_215;

/// Named length selecting `LONGTEXT` (its byte capacity, 2^32 - 1).
pub const LONG_TEXT_LENGTH: u32 = u32::MAX;

/// Dialect limits bundle consumed by the rule engine.
///
/// # Examples
///
/// ```
/// use ddlkit_types::mysql::{DialectLimits, TextTier, MEDIUM_TEXT_LENGTH};
///
/// const LIMITS: DialectLimits = DialectLimits::MYSQL;
/// assert_eq!(LIMITS.default_string_length, 255);
/// assert_eq!(LIMITS.tier_for_length(MEDIUM_TEXT_LENGTH), Some(TextTier::Medium));
/// assert_eq!(LIMITS.tier_for_length(8000), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DialectLimits {
    /// VARCHAR length assumed when a field has none
    pub default_string_length: u32,
    /// Longest VARCHAR that may be indexed without a key prefix
    pub max_indexable_varchar_length: u32,
    /// Named length selecting TINYTEXT
    #[cfg_attr(feature = "serde", serde(skip))]
    pub tiny_text_length: u32,
    /// Named length selecting MEDIUMTEXT
    #[cfg_attr(feature = "serde", serde(skip))]
    pub medium_text_length: u32,
    /// Named length selecting LONGTEXT
    #[cfg_attr(feature = "serde", serde(skip))]
    pub long_text_length: u32,
}

impl DialectLimits {
    /// Limits of a stock MySQL server.
    pub const MYSQL: Self = Self {
        default_string_length: DEFAULT_STRING_LENGTH,
        max_indexable_varchar_length: MAX_INDEXABLE_VARCHAR_LENGTH,
        tiny_text_length: TINY_TEXT_LENGTH,
        medium_text_length: MEDIUM_TEXT_LENGTH,
        long_text_length: LONG_TEXT_LENGTH,
    };

    /// Map a named threshold length to its TEXT tier.
    ///
    /// Returns `None` for every length that is a plain VARCHAR length.
    #[must_use]
    pub const fn tier_for_length(&self, length: u32) -> Option<TextTier> {
        if length == self.tiny_text_length {
            Some(TextTier::Tiny)
        } else if length == self.medium_text_length {
            Some(TextTier::Medium)
        } else if length == self.long_text_length {
            Some(TextTier::Long)
        } else {
            None
        }
    }

    /// Whether a VARCHAR of `length` may be indexed without a key prefix
    #[inline]
    #[must_use]
    pub const fn is_indexable_varchar(&self, length: u32) -> bool {
        length <= self.max_indexable_varchar_length
    }
}

impl Default for DialectLimits {
    fn default() -> Self {
        Self::MYSQL
    }
}
