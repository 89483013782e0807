//! Form field model

/// A single form control, addressable by `id` (label association) and
/// `name` (observation target)
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: String,
    pub name: String,
    pub value: String,
    /// Mirrors the control's required attribute: `false` means absent
    pub required: bool,
    /// Name of the field this one depends on, if it opts in
    pub dependency_field: Option<String>,
    /// Raw comma-separated trigger values, as declared
    pub dependency_value: Option<String>,
}

impl FormField {
    /// Create a plain field with no dependency declaration
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            value: String::new(),
            required: false,
            dependency_field: None,
            dependency_value: None,
        }
    }

    /// Create a field with an initial value
    pub fn with_value(id: &str, name: &str, value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::new(id, name)
        }
    }

    /// Create a field whose required state depends on another field
    pub fn dependent(id: &str, name: &str, observed: &str, trigger_values: &str) -> Self {
        Self {
            dependency_field: Some(observed.to_string()),
            dependency_value: Some(trigger_values.to_string()),
            ..Self::new(id, name)
        }
    }

    /// Returns true if the field carries a dependency declaration
    pub fn has_dependency(&self) -> bool {
        self.dependency_field.is_some()
    }

    /// Replace the field value
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Push a character to the field value (keystroke editing)
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_empty_value_and_no_dependency() {
        let field = FormField::new("department", "department");
        assert_eq!(field.value, "");
        assert!(!field.required);
        assert!(!field.has_dependency());
    }

    #[test]
    fn test_with_value() {
        let field = FormField::with_value("industry", "industry", "Academia");
        assert_eq!(field.value, "Academia");
    }

    #[test]
    fn test_dependent_carries_declarations() {
        let field = FormField::dependent("department", "department", "industry", "Academia,Education");
        assert!(field.has_dependency());
        assert_eq!(field.dependency_field.as_deref(), Some("industry"));
        assert_eq!(field.dependency_value.as_deref(), Some("Academia,Education"));
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::new("industry", "industry");
        field.push_char('a');
        field.push_char('b');
        assert_eq!(field.value, "ab");
        field.pop_char();
        assert_eq!(field.value, "a");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::new("industry", "industry");
        field.pop_char();
        assert_eq!(field.value, "");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::with_value("industry", "industry", "Academia");
        field.clear();
        assert_eq!(field.value, "");
    }
}
