//! Errors raised while wiring modules together.

use thiserror::Error;

/// Errors that can occur when assembling module trees and bindings.
///
/// All of them surface at wiring time, before any action is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    #[error("Invalid module shape at '{path}': {reason}")]
    InvalidModuleShape { path: String, reason: String },

    #[error("Action '{name}' is defined by more than one merged action map")]
    DuplicateAction { name: String },

    #[error("Unknown action '{name}'")]
    UnknownAction { name: String },
}

impl ModuleError {
    pub(crate) fn shape(path: &str, reason: impl Into<String>) -> Self {
        let path = if path.is_empty() { "<root>" } else { path };
        ModuleError::InvalidModuleShape {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
