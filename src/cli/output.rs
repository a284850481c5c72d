//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::PanelError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &PanelError) -> String {
    match e {
        PanelError::Validation(message) => format!("Request rejected: {}", message),
        other => other.to_string(),
    }
}
