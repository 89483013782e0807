//! Build-time configuration errors

use thiserror::Error;

/// Raised while wiring dependencies, before any event handling happens.
///
/// Soft conditions (a declared dependency target that matches no field, or a
/// field without a label) are not errors and never surface here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A field declares a dependency target but no trigger values, so no
    /// evaluation rule can be derived for it.
    #[error("field `{field_id}` declares a dependency field but no trigger values")]
    MissingTriggerValues { field_id: String },
}
