use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the column (nullable fields only)
// - Value(v): replace with v
//
// Serde behavior (request fields must carry #[serde(default)]):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn is_present(&self) -> bool {
        !self.is_unset()
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }

    /// Records `name` when the field takes part in the update.
    pub fn mark(&self, name: &'static str, present: &mut Vec<&'static str>) {
        if self.is_present() {
            present.push(name);
        }
    }

    /// Overwrites a required slot. `Null` is rejected during validation
    /// and never reaches this point.
    pub fn apply(&self, slot: &mut T)
    where
        T: Clone,
    {
        if let PatchField::Value(v) = self {
            *slot = v.clone();
        }
    }

    pub fn apply_nullable(&self, slot: &mut Option<T>)
    where
        T: Clone,
    {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *slot = None,
            PatchField::Value(v) => *slot = Some(v.clone()),
        }
    }

    /// Value the field will hold once the patch is applied.
    pub fn resolve<'a>(&'a self, current: Option<&'a T>) -> Option<&'a T> {
        match self {
            PatchField::Unset => current,
            PatchField::Null => None,
            PatchField::Value(v) => Some(v),
        }
    }
}

impl PatchField<String> {
    /// Trims string values; blank strings count as not sent.
    pub fn blank_as_unset(self) -> Self {
        match self {
            PatchField::Value(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    PatchField::Unset
                } else {
                    PatchField::Value(trimmed.to_string())
                }
            }
            other => other,
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Unset,
        }
    }
}
