//! CLI presentation: text and json formatters per command.

use crate::error::PanelError;
use crate::panel::{PanelKind, RenderedPanel};
use serde::Serialize;
use serde_json::json;

pub fn format_rendered_text(rendered: &RenderedPanel) -> String {
    format!("{}\nid: {}", rendered.json, rendered.id)
}

pub fn format_rendered_json(rendered: &RenderedPanel) -> Result<String, PanelError> {
    Ok(serde_json::to_string_pretty(rendered)?)
}

pub fn format_validate_result(
    kind: PanelKind,
    title: &str,
    format: &str,
) -> Result<String, PanelError> {
    if format == "json" {
        let out = json!({ "valid": true, "kind": kind.as_str(), "title": title });
        Ok(serde_json::to_string_pretty(&out)?)
    } else {
        Ok(format!("Request is valid: {} panel '{}'", kind, title))
    }
}

pub fn format_defaults_json<T: Serialize>(defaults: &T) -> Result<String, PanelError> {
    Ok(serde_json::to_string_pretty(defaults)?)
}
