//! Serialization and identifier derivation.

use crate::error::PanelError;
use crate::grafana::Panel;
use serde::Serialize;

/// A serialized panel document and its content-derived identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPanel {
    pub id: String,
    pub json: String,
}

/// Serialize a panel document with two-space indentation
///
/// The identifier is a pure function of the emitted bytes, so equal
/// documents always share an id.
pub fn render<B: Serialize>(panel: &Panel<B>) -> Result<RenderedPanel, PanelError> {
    let json = serde_json::to_string_pretty(panel)?;
    let id = hashcode(json.as_bytes()).to_string();
    Ok(RenderedPanel { id, json })
}

/// CRC-32 (IEEE) of `bytes`, widened and folded to a non-negative integer
pub fn hashcode(bytes: &[u8]) -> i64 {
    fold_non_negative(i64::from(crc32fast::hash(bytes)))
}

/// Absolute value, with `i64::MIN` mapped to zero
fn fold_non_negative(value: i64) -> i64 {
    value.checked_abs().unwrap_or(0)
}
