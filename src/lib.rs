//! Dependent required fields
//!
//! A declarative conditional-requirement engine: a form field becomes
//! required only while another designated field's value matches one of its
//! configured trigger values. Dependencies are declared on the field
//! definitions, not in code:
//!
//! - `required-dependency-field` names the observed field (its `name`,
//!   scoped to the same form)
//! - `required-dependency-value` lists the trigger values, comma-separated;
//!   matching is case-insensitive
//!
//! When a field becomes required, its required flag is set and its label
//! gains a single `*` indicator; when it is un-required, both are removed.
//!
//! ```
//! use dependent_required::{Engine, Form, FormField, Label};
//!
//! let mut form = Form::new();
//! form.add_field(FormField::new("industry", "industry"));
//! form.add_field(FormField::dependent(
//!     "department",
//!     "department",
//!     "industry",
//!     "Academia,Education",
//! ));
//! form.add_label(Label::new("department", "Department"));
//!
//! let engine = Engine::attach(&mut form).unwrap();
//! form.set_value("industry", "Academia");
//! engine.handle_change(&mut form, "industry");
//!
//! assert!(form.field_by_id("department").unwrap().required);
//! assert_eq!(
//!     form.label_for("department").unwrap().display_text(),
//!     "Department *"
//! );
//! ```

mod config;
mod engine;
mod error;
mod form;

pub use config::{DependencyRule, FieldDef, FormDefinition, LabelDef};
pub use engine::{apply, evaluate, Decision, DependencyLink, DependencyRegistry, Engine};
pub use error::ConfigError;
pub use form::{Form, FormField, Label, INDICATOR};
