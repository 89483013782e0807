//! Owned form container with form-scoped lookup

use super::field::FormField;
use super::label::Label;

/// One form: the fields and labels the engine operates on.
///
/// Lookup is scoped to this form, matching the original markup contract
/// where dependency targets and labels resolve within the enclosing form.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<FormField>,
    labels: Vec<Label>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, returning its stable index
    pub fn add_field(&mut self, field: FormField) -> usize {
        self.fields.push(field);
        self.fields.len() - 1
    }

    /// Add a label, returning its stable index
    pub fn add_label(&mut self, label: Label) -> usize {
        self.labels.push(label);
        self.labels.len() - 1
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields.get_mut(index)
    }

    /// Find a field by `name`, first match wins
    pub fn field_index_by_name(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Find a field by `id`, first match wins
    pub fn field_index_by_id(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    pub fn field_by_id(&self, id: &str) -> Option<&FormField> {
        self.field_index_by_id(id).and_then(|i| self.field(i))
    }

    pub fn field_by_id_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.field_index_by_id(id).and_then(|i| self.field_mut(i))
    }

    pub fn label(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    pub fn label_mut(&mut self, index: usize) -> Option<&mut Label> {
        self.labels.get_mut(index)
    }

    /// Find the label associated with a field id; absence is permitted
    pub fn label_index_for(&self, field_id: &str) -> Option<usize> {
        self.labels.iter().position(|l| l.for_id == field_id)
    }

    pub fn label_for(&self, field_id: &str) -> Option<&Label> {
        self.label_index_for(field_id).and_then(|i| self.label(i))
    }

    /// Set a field's value by `name`. Returns false if no such field exists.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.field_index_by_name(name) {
            Some(i) => {
                self.fields[i].set_value(value);
                true
            }
            None => false,
        }
    }
}
