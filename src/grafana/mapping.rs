//! Value mappings: rules that replace raw values with display text and color.

use crate::grafana::styles::SpecialMatch;
use serde::Serialize;
use std::collections::BTreeMap;

/// Display result attached to every mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingResult {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Position of this result in the mapping list of its block
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeMapping {
    pub from: f64,
    pub result: MappingResult,
    pub to: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegexMapping {
    pub pattern: String,
    pub result: MappingResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialMapping {
    #[serde(rename = "match")]
    pub matcher: SpecialMatch,
    pub result: MappingResult,
}

/// One entry of `fieldConfig.defaults.mappings`
///
/// Serializes as `{"type": "<kind>", "options": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "lowercase")]
pub enum FieldMapping {
    /// All value mappings of a block, keyed by the literal value
    Value(BTreeMap<String, MappingResult>),
    Range(RangeMapping),
    Regex(RegexMapping),
    Special(SpecialMapping),
}

impl FieldMapping {
    /// Indices carried by this mapping, in emission order
    pub fn indices(&self) -> Vec<usize> {
        match self {
            FieldMapping::Value(values) => {
                let mut indices: Vec<usize> = values.values().map(|r| r.index).collect();
                indices.sort_unstable();
                indices
            }
            FieldMapping::Range(range) => vec![range.result.index],
            FieldMapping::Regex(regex) => vec![regex.result.index],
            FieldMapping::Special(special) => vec![special.result.index],
        }
    }
}
