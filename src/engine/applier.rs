//! Applies decisions to the dependent field and its label

use super::evaluator::Decision;
use super::registry::DependencyLink;
use crate::form::Form;
use tracing::debug;

/// Mutate the dependent field's required state and sync its label indicator.
///
/// Idempotent in both directions. When the link resolved no label, the
/// indicator work degrades to a no-op.
pub fn apply(form: &mut Form, link: &DependencyLink, decision: Decision) {
    match decision {
        Decision::Require => {
            if let Some(field) = form.field_mut(link.dependent) {
                field.required = true;
            }
            if let Some(index) = link.label {
                if let Some(label) = form.label_mut(index) {
                    // add_indicator guards against duplicates
                    label.add_indicator();
                }
            }
        }
        Decision::Unrequire => {
            if let Some(field) = form.field_mut(link.dependent) {
                field.required = false;
            }
            if let Some(index) = link.label {
                if let Some(label) = form.label_mut(index) {
                    label.clear_indicators();
                }
            }
        }
    }
    debug!(dependent = link.dependent, ?decision, "applied requirement decision");
}
