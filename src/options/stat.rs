//! Stat-only blocks: value reduction, text size and layout.

use crate::grafana::styles::{JustifyMode, Orientation, StatColorMode, StatGraphMode, StatTextMode};
use serde::Deserialize;

/// How the series of a stat panel are reduced to a single value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReduceOptions {
    pub values: Option<bool>,
    pub fields: Option<String>,
    pub limit: Option<u32>,
    pub calculation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextSizeOptions {
    pub title: Option<u32>,
    pub value: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatGraphOptions {
    pub orientation: Option<Orientation>,
    pub text_mode: Option<StatTextMode>,
    pub color_mode: Option<StatColorMode>,
    pub graph_mode: Option<StatGraphMode>,
    pub text_alignment: Option<JustifyMode>,
}
