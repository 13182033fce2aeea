#![cfg(feature = "mysql")]

use ddlkit::error::{IndexRequest, ViolationReason};
use ddlkit::prelude::*;

const LIMITS: DialectLimits = DialectLimits::MYSQL;

fn check(field: FieldDescriptor) -> (MySqlStringType, Result<(), ConstraintViolation>) {
    let decision = resolve_column_type(&field, &LIMITS);
    (decision.sql_type, validate_index_request(&decision, &field))
}

#[test]
fn indexable_lengths_validate() {
    for n in 1..=MAX_INDEXABLE_VARCHAR_LENGTH {
        let (sql_type, verdict) = check(FieldDescriptor::new("value").length(n).unique());
        assert_eq!(sql_type, MySqlStringType::Varchar(n));
        assert!(verdict.is_ok(), "VARCHAR({n}) should be indexable");
    }
}

#[test]
fn lengths_past_the_key_limit_fail() {
    for n in (MAX_INDEXABLE_VARCHAR_LENGTH + 1..=4096).chain([8000, 65_535, 100_000]) {
        let (sql_type, verdict) = check(FieldDescriptor::new("value").length(n).indexed());
        assert_eq!(sql_type, MySqlStringType::Varchar(n));
        let violation = verdict.unwrap_err();
        assert_eq!(
            violation.reason,
            ViolationReason::UnindexableColumnTypeOrLength
        );
    }
}

#[test]
fn default_length_is_indexable() {
    let (sql_type, verdict) = check(FieldDescriptor::new("value").unique());
    assert_eq!(sql_type, MySqlStringType::Varchar(DEFAULT_STRING_LENGTH));
    assert!(verdict.is_ok());

    let (_, verdict) = check(FieldDescriptor::new("id").primary_key());
    assert!(verdict.is_ok());
}

#[test]
fn tiny_text_ignores_the_hint() {
    let plain = FieldDescriptor::new("value").length(TINY_TEXT_LENGTH);
    assert_eq!(check(plain).0, MySqlStringType::Text(TextTier::Tiny));
    assert_eq!(check(plain.text()).0, MySqlStringType::Text(TextTier::Tiny));
}

#[test]
fn medium_and_long_text() {
    let (sql_type, _) = check(FieldDescriptor::new("value").length(MEDIUM_TEXT_LENGTH));
    assert_eq!(sql_type.to_string(), "MEDIUMTEXT");

    let (sql_type, _) = check(FieldDescriptor::new("value").length(LONG_TEXT_LENGTH));
    assert_eq!(sql_type.to_string(), "LONGTEXT");
}

#[test]
fn varchar_255_unique_succeeds() {
    let (sql_type, verdict) = check(FieldDescriptor::new("value").length(255).unique());
    assert_eq!(sql_type.to_string(), "VARCHAR(255)");
    assert!(verdict.is_ok());
}

#[test]
fn varchar_256_unique_is_a_violation() {
    let (sql_type, verdict) = check(FieldDescriptor::new("value").length(256).unique());
    assert_eq!(sql_type.to_string(), "VARCHAR(256)");
    let violation = verdict.unwrap_err();
    assert_eq!(violation.request, IndexRequest::Index(IndexKind::Unique));
    assert_eq!(violation.reason.as_str(), "unindexable-column-type-or-length");
}

#[test]
fn varchar_8000_without_index_succeeds() {
    let (sql_type, verdict) = check(FieldDescriptor::new("value").length(8000));
    assert_eq!(sql_type.to_string(), "VARCHAR(8000)");
    assert!(verdict.is_ok());
}

#[test]
fn unique_text_is_a_violation() {
    let (sql_type, verdict) = check(FieldDescriptor::new("value").text().unique());
    assert_eq!(sql_type.to_string(), "TEXT");
    assert!(verdict.is_err());
}

#[test]
fn every_text_tier_refuses_a_primary_key() {
    for tier in [
        TextTier::Tiny,
        TextTier::Regular,
        TextTier::Medium,
        TextTier::Long,
    ] {
        let field = FieldDescriptor::new("id").text_tier(tier).primary_key();
        let (sql_type, verdict) = check(field);
        assert_eq!(sql_type, MySqlStringType::Text(tier));
        assert_eq!(verdict.unwrap_err().request, IndexRequest::PrimaryKey);
    }
}

#[test]
fn resolution_is_shareable_across_threads() {
    let handles: Vec<_> = (1..=8u32)
        .map(|i| {
            std::thread::spawn(move || {
                resolve_column_type(&FieldDescriptor::new("value").length(i * 100), &LIMITS)
            })
        })
        .collect();

    for (i, handle) in (1..=8u32).zip(handles) {
        let decision = handle.join().unwrap();
        assert_eq!(decision.sql_type, MySqlStringType::Varchar(i * 100));
        assert_eq!(decision.is_indexable, i * 100 <= MAX_INDEXABLE_VARCHAR_LENGTH);
    }
}
