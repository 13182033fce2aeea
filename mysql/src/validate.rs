//! Local constraint validation
//!
//! Runs before any statement is sent so an impossible index request fails with a
//! precise [`ConstraintViolation`] instead of an opaque driver error. It only models
//! the key-length rule; charset byte limits and the like are left to the server.

use ddlkit_core::{ConstraintViolation, IndexRequest, ViolationReason};
use ddlkit_types::mysql::DialectLimits;
use ddlkit_types::mysql::ddl::FieldDescriptor;

use crate::rules::{ColumnTypeDecision, resolve_column_type};

/// Check that a field's primary-key/index request fits its resolved type.
///
/// Fields that request nothing always pass.
pub fn validate_index_request(
    decision: &ColumnTypeDecision,
    descriptor: &FieldDescriptor,
) -> Result<(), ConstraintViolation> {
    if !descriptor.requests_index() || decision.is_indexable {
        return Ok(());
    }

    let request = match descriptor.index {
        Some(kind) if !descriptor.primary_key => IndexRequest::Index(kind),
        _ => IndexRequest::PrimaryKey,
    };

    let violation = ConstraintViolation {
        field: descriptor.name.to_string(),
        sql_type: decision.sql_type,
        request,
        reason: ViolationReason::UnindexableColumnTypeOrLength,
    };
    ddlkit_core::ddlkit_warn!(
        field = descriptor.name,
        sql_type = %decision.sql_type,
        reason = violation.reason.as_str(),
        "ddlkit.constraint_violation"
    );
    Err(violation)
}

/// Resolve a field and validate its index request in one step.
pub fn resolve_and_validate(
    descriptor: &FieldDescriptor,
    limits: &DialectLimits,
) -> Result<ColumnTypeDecision, ConstraintViolation> {
    let decision = resolve_column_type(descriptor, limits);
    validate_index_request(&decision, descriptor)?;
    Ok(decision)
}
