use serde::Serialize;

use crate::shared::patch::{CreatePlan, FieldError};
use crate::shared::validation::Violations;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Back-office area the permission belongs to, e.g. "property".
    pub module: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    pub role_id: i32,
    pub permission_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPermission {
    pub name: String,
    pub description: Option<String>,
    pub module: Option<String>,
}

fn clean(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl NewPermission {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: clean(self.description),
            module: clean(self.module),
        }
    }
}

impl CreatePlan for NewPermission {
    fn validate(&self) -> Vec<FieldError> {
        let mut v = Violations::new();
        if v.required("name", &self.name) {
            v.max_chars("name", &self.name, 50);
        }
        if let Some(description) = &self.description {
            v.max_chars("description", description, 100);
        }
        if let Some(module) = &self.module {
            v.max_chars("module", module, 64);
        }
        v.into_vec()
    }
}
