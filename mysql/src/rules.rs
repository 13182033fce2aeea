//! String column type resolution
//!
//! Decides, for one string field, whether MySQL gets `VARCHAR(n)` or a TEXT-family
//! type and whether that column can carry an unprefixed index. Resolution is total:
//! it never fails and never caps a requested length. Legality is checked separately
//! by [`validate_index_request`](crate::validate_index_request).

use ddlkit_types::mysql::ddl::FieldDescriptor;
use ddlkit_types::mysql::{DialectLimits, MySqlStringType, TextTier};

/// Outcome of resolving one string field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnTypeDecision {
    /// Column type to emit
    pub sql_type: MySqlStringType,
    /// Whether an index/unique constraint may target the column without a key prefix
    pub is_indexable: bool,
}

impl ColumnTypeDecision {
    /// SQL type text, e.g. `VARCHAR(255)` or `MEDIUMTEXT`
    #[must_use]
    pub fn sql_type_name(&self) -> String {
        self.sql_type.to_string()
    }
}

/// Resolve the column type of a string field.
///
/// Precedence:
/// 1. a length equal to a named TEXT threshold selects that tier, hint or not
/// 2. the unbounded-text hint selects `TEXT`
/// 3. any other explicit length becomes `VARCHAR(length)`, uncapped
/// 4. otherwise `VARCHAR(limits.default_string_length)`
///
/// # Examples
///
/// ```
/// use ddlkit_mysql::resolve_column_type;
/// use ddlkit_types::mysql::ddl::FieldDescriptor;
/// use ddlkit_types::mysql::{DialectLimits, MySqlStringType};
///
/// let decision = resolve_column_type(
///     &FieldDescriptor::new("value").length(256).unique(),
///     &DialectLimits::MYSQL,
/// );
/// assert_eq!(decision.sql_type, MySqlStringType::Varchar(256));
/// assert!(!decision.is_indexable);
/// ```
#[must_use]
pub fn resolve_column_type(
    descriptor: &FieldDescriptor,
    limits: &DialectLimits,
) -> ColumnTypeDecision {
    let tier = descriptor
        .explicit_length
        .and_then(|len| limits.tier_for_length(len));

    let sql_type = match (tier, descriptor.explicit_length) {
        (Some(tier), _) => MySqlStringType::Text(tier),
        _ if descriptor.unbounded_text => MySqlStringType::Text(TextTier::Regular),
        (None, Some(len)) => MySqlStringType::Varchar(len),
        (None, None) => MySqlStringType::Varchar(limits.default_string_length),
    };

    let is_indexable = match sql_type {
        MySqlStringType::Varchar(len) => limits.is_indexable_varchar(len),
        MySqlStringType::Text(_) => false,
    };

    ddlkit_core::ddlkit_trace_resolve!(descriptor.name, sql_type, is_indexable);

    ColumnTypeDecision {
        sql_type,
        is_indexable,
    }
}
