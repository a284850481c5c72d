//! Field block: units, limits, color, thresholds and value mappings.

use crate::grafana::styles::{ColorMode, SpecialMatch, ThresholdMode};
use crate::options::one_or_many;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    pub unit: Option<String>,
    pub decimals: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub no_value: Option<f64>,
    #[serde(deserialize_with = "one_or_many")]
    pub color: Vec<ColorOptions>,
    #[serde(deserialize_with = "one_or_many")]
    pub mappings: Vec<MappingOptions>,
    #[serde(deserialize_with = "one_or_many")]
    pub thresholds: Vec<ThresholdOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorOptions {
    pub mode: Option<ColorMode>,
    pub fixed_color: Option<String>,
    pub series_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThresholdOptions {
    pub mode: Option<ThresholdMode>,
    #[serde(alias = "steps")]
    pub step: Vec<ThresholdStepOptions>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThresholdStepOptions {
    pub color: String,
    #[serde(default)]
    pub value: Option<f64>,
}

/// One mapping block; each list may hold several rules
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MappingOptions {
    pub value: Vec<ValueMappingOptions>,
    pub range: Vec<RangeMappingOptions>,
    pub regex: Vec<RegexMappingOptions>,
    pub special: Vec<SpecialMappingOptions>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValueMappingOptions {
    pub value: String,
    #[serde(default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RangeMappingOptions {
    pub from: f64,
    pub to: f64,
    #[serde(default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegexMappingOptions {
    pub pattern: String,
    #[serde(default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpecialMappingOptions {
    #[serde(rename = "match")]
    pub matcher: SpecialMatch,
    #[serde(default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}
