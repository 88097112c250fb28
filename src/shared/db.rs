use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, SimpleExpr};
use sea_orm::{ActiveValue, DbErr, Value};

use crate::shared::codes::UnknownCode;
use crate::shared::patch::{PatchField, StoreError, UniqueField};

pub fn map_db_err(e: DbErr) -> StoreError {
    StoreError::Database(e.to_string())
}

/// Maps a write failure, recognising unique-index violations by index name.
pub fn map_write_err(e: DbErr, unique_indexes: &[(&str, UniqueField)]) -> StoreError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        if let Some((_, field)) = unique_indexes
            .iter()
            .find(|(index, _)| msg.contains(index))
        {
            return StoreError::UniqueViolation(*field);
        }
    }

    StoreError::Database(e.to_string())
}

impl From<UnknownCode> for StoreError {
    fn from(e: UnknownCode) -> Self {
        StoreError::InvalidRow(e.to_string())
    }
}

/// Stages a non-nullable column: only `Value` is written.
pub fn stage<T>(field: PatchField<T>) -> ActiveValue<T>
where
    T: Into<Value>,
{
    match field {
        PatchField::Value(v) => ActiveValue::Set(v),
        PatchField::Unset | PatchField::Null => ActiveValue::NotSet,
    }
}

/// Stages a nullable column: `Null` clears it.
pub fn stage_nullable<T>(field: PatchField<T>) -> ActiveValue<Option<T>>
where
    T: Into<Value>,
    Option<T>: Into<Value>,
{
    match field {
        PatchField::Unset => ActiveValue::NotSet,
        PatchField::Null => ActiveValue::Set(None),
        PatchField::Value(v) => ActiveValue::Set(Some(v)),
    }
}

/// `%needle%` with LIKE wildcards in the needle escaped.
pub fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Case-insensitive substring match on a text column.
pub fn lower_contains<C>(column: C, needle: &str) -> SimpleExpr
where
    C: IntoColumnRef,
{
    Expr::expr(Func::lower(Expr::col(column))).like(contains_pattern(needle))
}

pub fn to_db_time(t: DateTime<Utc>) -> DateTime<FixedOffset> {
    t.fixed_offset()
}

pub fn from_db_time(t: DateTime<FixedOffset>) -> DateTime<Utc> {
    t.with_timezone(&Utc)
}
