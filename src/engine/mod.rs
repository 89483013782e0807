//! Dependency engine: wiring, evaluation, and application

mod applier;
mod evaluator;
mod registry;

pub use applier::apply;
pub use evaluator::{evaluate, Decision};
pub use registry::{DependencyLink, DependencyRegistry};

use crate::error::ConfigError;
use crate::form::Form;

/// The conditional-requirement engine for one form.
///
/// `attach` builds the dependency registry from the form's declarations and
/// immediately runs one evaluation pass per observed field, so pre-filled
/// values are reflected before any interaction. After that, the host feeds
/// every change or keystroke on an observed field through [`Engine::handle_change`].
#[derive(Debug, Clone)]
pub struct Engine {
    registry: DependencyRegistry,
}

impl Engine {
    /// Build the registry and run the initial evaluation pass
    pub fn attach(form: &mut Form) -> Result<Self, ConfigError> {
        let registry = DependencyRegistry::build(form)?;
        let engine = Self { registry };
        let names: Vec<String> = engine.registry.observed_names().to_vec();
        for name in &names {
            engine.handle_change(form, name);
        }
        Ok(engine)
    }

    /// React to a value change on an observed field.
    ///
    /// Evaluates every link registered against the field, in registration
    /// order, and applies each decision. Unobserved names are ignored.
    pub fn handle_change(&self, form: &mut Form, observed_name: &str) {
        let Some(index) = form.field_index_by_name(observed_name) else {
            return;
        };
        let value = match form.field(index) {
            Some(field) => field.value.clone(),
            None => return,
        };
        for link in self.registry.links_for(observed_name) {
            let decision = evaluate(&value, &link.accepted_values);
            apply(form, link, decision);
        }
    }

    /// React to a keystroke on an observed field. Shares the change path:
    /// the original contract treats change and keyup identically.
    pub fn handle_keystroke(&self, form: &mut Form, observed_name: &str) {
        self.handle_change(form, observed_name);
    }

    pub fn registry(&self) -> &DependencyRegistry {
        &self.registry
    }
}
