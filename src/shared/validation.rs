use crate::shared::patch::{FieldError, PatchField};

/// Accumulates field errors so a request reports every problem at once.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldError>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.push(field, message);
        }
    }

    pub fn required(&mut self, field: &str, value: &str) -> bool {
        let present = !value.trim().is_empty();
        self.check(present, field, "is required");
        present
    }

    pub fn max_chars(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(field, format!("must be at most {max} characters"));
        }
    }

    /// Non-nullable columns may be replaced but never cleared.
    pub fn not_null<T>(&mut self, field: &str, value: &PatchField<T>) {
        if value.is_null() {
            self.push(field, "cannot be cleared");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}
