//! Dependency registry built once from the form's declarations

use crate::config::DependencyRule;
use crate::error::ConfigError;
use crate::form::Form;
use std::collections::HashMap;
use tracing::warn;

/// One dependency: a dependent field, its trigger values, and its label.
///
/// References into the form are indices resolved once at build time; the
/// registry never re-resolves them per event.
#[derive(Debug, Clone)]
pub struct DependencyLink {
    /// Index of the dependent field in the form
    pub dependent: usize,
    /// Lowercased trigger values from the field's declaration
    pub accepted_values: Vec<String>,
    /// Index of the dependent's label, if one resolved
    pub label: Option<usize>,
}

/// Maps each observed field's `name` to the links registered against it.
///
/// Built once, read-only afterwards. Fields added to the form after the
/// build are not picked up.
#[derive(Debug, Clone, Default)]
pub struct DependencyRegistry {
    links: HashMap<String, Vec<DependencyLink>>,
    /// Observed names in first-registration order, for the initial pass
    observed: Vec<String>,
}

impl DependencyRegistry {
    /// Build the registry from every field carrying a dependency declaration.
    ///
    /// A declaration naming a field that does not exist in this form is a
    /// soft condition: it is logged and no link is created, so the dependent
    /// field simply never changes required state.
    pub fn build(form: &Form) -> Result<Self, ConfigError> {
        let mut registry = Self::default();

        for (index, field) in form.fields().iter().enumerate() {
            let Some(rule) = DependencyRule::parse(field)? else {
                continue;
            };

            if form.field_index_by_name(&rule.observed).is_none() {
                warn!(
                    field = %field.id,
                    observed = %rule.observed,
                    "dependency target matches no field in this form"
                );
                continue;
            }

            // label resolved once here, reused for the lifetime of the form
            let label = form.label_index_for(&field.id);

            let entry = registry.links.entry(rule.observed.clone()).or_default();
            if entry.is_empty() {
                registry.observed.push(rule.observed.clone());
            }
            entry.push(DependencyLink {
                dependent: index,
                accepted_values: rule.accepted_values,
                label,
            });
        }

        Ok(registry)
    }

    /// Links registered against an observed field, in registration order
    pub fn links_for(&self, observed_name: &str) -> &[DependencyLink] {
        self.links.get(observed_name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Observed field names in first-registration order
    pub fn observed_names(&self) -> &[String] {
        &self.observed
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}
