use serde::Serialize;

/// Columns guarded by a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UniqueField {
    Username,
    IdCard,
    PropertyCode,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueField::Username => "username",
            UniqueField::IdCard => "idCard",
            UniqueField::PropertyCode => "propertyCode",
        }
    }
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate value for a unique column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueClaim {
    pub field: UniqueField,
    pub value: String,
}

impl UniqueClaim {
    pub fn new(field: UniqueField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Another row already holds the claimed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub field: UniqueField,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// `None` when no stored row is known to hold the value, e.g. a clash
    /// raised by the database index or with an earlier item of a batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i32>,
}

/// Malformed or out-of-range input for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Re-targets the error at an item of a batch, e.g. `items[2].username`.
    pub fn at_index(self, index: usize) -> Self {
        Self {
            field: format!("items[{index}].{}", self.field),
            message: self.message,
        }
    }
}
