//! Field defaults shared by every panel kind that carries a `fieldConfig`.

use crate::grafana::mapping::FieldMapping;
use crate::grafana::styles::{ColorMode, ThresholdMode};
use crate::grafana::ThresholdStep;
use serde::Serialize;

/// Default field settings
///
/// `decimals`, `min`, `max` and `no_value` are nullable in the document;
/// `None` here means "leave unset", not "inherit".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDefaults {
    pub unit: String,
    pub decimals: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub no_value: Option<f64>,
    pub color: ColorDefaults,
    pub thresholds: ThresholdDefaults,
    pub mappings: Vec<FieldMapping>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorDefaults {
    pub mode: ColorMode,
    pub fixed_color: String,
    pub series_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdDefaults {
    pub mode: ThresholdMode,
    pub steps: Vec<ThresholdStep>,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            unit: String::new(),
            decimals: None,
            min: None,
            max: None,
            no_value: None,
            color: ColorDefaults::default(),
            thresholds: ThresholdDefaults::default(),
            mappings: Vec::new(),
        }
    }
}

impl Default for ColorDefaults {
    fn default() -> Self {
        Self {
            mode: ColorMode::PaletteClassic,
            fixed_color: "green".to_string(),
            series_by: "last".to_string(),
        }
    }
}

impl Default for ThresholdDefaults {
    fn default() -> Self {
        Self {
            mode: ThresholdMode::Absolute,
            steps: vec![ThresholdStep {
                color: "green".to_string(),
                value: None,
            }],
        }
    }
}
