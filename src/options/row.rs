//! Row block.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RowGraphOptions {
    pub collapsed: Option<bool>,
}
