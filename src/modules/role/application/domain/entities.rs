use serde::Serialize;

use crate::shared::patch::{CreatePlan, FieldError, PatchField, PatchPlan};
use crate::shared::validation::Violations;

const NAME_MAX: usize = 30;
const DESCRIPTION_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRole {
    pub name: String,
    pub description: Option<String>,
}

impl NewRole {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }
}

impl CreatePlan for NewRole {
    fn validate(&self) -> Vec<FieldError> {
        let mut v = Violations::new();
        if v.required("name", &self.name) {
            v.max_chars("name", &self.name, NAME_MAX);
        }
        if let Some(description) = &self.description {
            v.max_chars("description", description, DESCRIPTION_MAX);
        }
        v.into_vec()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePatch {
    pub name: PatchField<String>,
    pub description: PatchField<String>,
}

impl PatchPlan<Role> for RolePatch {
    fn normalize(self) -> Self {
        Self {
            name: self.name.blank_as_unset(),
            description: self.description.blank_as_unset(),
        }
    }

    fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        self.name.mark("name", &mut fields);
        self.description.mark("description", &mut fields);
        fields
    }

    fn validate(&self, _current: &Role) -> Vec<FieldError> {
        let mut v = Violations::new();
        v.not_null("name", &self.name);
        if let Some(name) = self.name.as_value() {
            v.max_chars("name", name, NAME_MAX);
        }
        if let Some(description) = self.description.as_value() {
            v.max_chars("description", description, DESCRIPTION_MAX);
        }
        v.into_vec()
    }

    fn apply_to(&self, row: &mut Role) {
        self.name.apply(&mut row.name);
        self.description.apply_nullable(&mut row.description);
    }
}
