//! Declarative form definitions and dependency-rule parsing
//!
//! The JSON keys of [`FieldDef`] mirror the markup attribute contract:
//! `required-dependency-field` names the observed field and
//! `required-dependency-value` carries the comma-separated trigger values.

use crate::error::ConfigError;
use crate::form::{Form, FormField, Label};
use serde::{Deserialize, Serialize};

/// Declarative description of a form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormDefinition {
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub labels: Vec<LabelDef>,
}

/// One field declaration, attribute names preserved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(
        rename = "required-dependency-field",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub required_dependency_field: Option<String>,
    #[serde(
        rename = "required-dependency-value",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub required_dependency_value: Option<String>,
}

/// One label declaration, associated with a field by `for` identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDef {
    #[serde(rename = "for")]
    pub for_id: String,
    pub text: String,
}

impl FormDefinition {
    /// Parse a definition from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<FormDefinition> for Form {
    fn from(def: FormDefinition) -> Self {
        let mut form = Form::new();
        for f in def.fields {
            let mut field = FormField::with_value(&f.id, &f.name, &f.value);
            field.dependency_field = f.required_dependency_field;
            field.dependency_value = f.required_dependency_value;
            form.add_field(field);
        }
        for l in def.labels {
            form.add_label(Label::new(&l.for_id, &l.text));
        }
        form
    }
}

/// A parsed, normalized dependency declaration: which field to observe and
/// which of its values trigger the required state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRule {
    /// `name` of the observed field, form-scoped
    pub observed: String,
    /// Lowercased trigger values. Entries are split on `,` and NOT trimmed:
    /// `"A, B"` yields `" b"` as its second entry.
    pub accepted_values: Vec<String>,
}

impl DependencyRule {
    /// Parse the declaration carried by a field, if any.
    ///
    /// Returns `Ok(None)` for fields that do not opt in. A dependency-field
    /// declaration without a value declaration is a configuration error.
    pub fn parse(field: &FormField) -> Result<Option<Self>, ConfigError> {
        let Some(observed) = field.dependency_field.as_deref() else {
            return Ok(None);
        };
        let raw = field
            .dependency_value
            .as_deref()
            .ok_or_else(|| ConfigError::MissingTriggerValues {
                field_id: field.id.clone(),
            })?;
        let accepted_values = raw.to_lowercase().split(',').map(str::to_string).collect();
        Ok(Some(Self {
            observed: observed.to_string(),
            accepted_values,
        }))
    }

    /// Case-insensitive membership test against the observed field's value
    pub fn matches(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.accepted_values.iter().any(|v| *v == value)
    }
}
