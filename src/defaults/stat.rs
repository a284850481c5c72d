//! Stat defaults.

use crate::defaults::field::FieldDefaults;
use crate::grafana::styles::{JustifyMode, Orientation, StatColorMode, StatGraphMode, StatTextMode};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatDefaults {
    pub field: FieldDefaults,
    pub reduce_options: ReduceOptionDefaults,
    pub text_size: TextSizeDefaults,
    pub graph: StatGraphDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReduceOptionDefaults {
    pub values: bool,
    pub fields: String,
    pub limit: Option<u32>,
    pub calculation: String,
}

/// Font sizes; `None` lets Grafana size the text automatically
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextSizeDefaults {
    pub title: Option<u32>,
    pub value: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatGraphDefaults {
    pub orientation: Orientation,
    pub text_mode: StatTextMode,
    pub color_mode: StatColorMode,
    pub graph_mode: StatGraphMode,
    pub text_alignment: JustifyMode,
}

impl Default for ReduceOptionDefaults {
    fn default() -> Self {
        Self {
            values: false,
            fields: String::new(),
            limit: None,
            calculation: "lastNotNull".to_string(),
        }
    }
}

impl Default for StatGraphDefaults {
    fn default() -> Self {
        Self {
            orientation: Orientation::Auto,
            text_mode: StatTextMode::Auto,
            color_mode: StatColorMode::Value,
            graph_mode: StatGraphMode::Area,
            text_alignment: JustifyMode::Auto,
        }
    }
}
