//! `fieldConfig` section of a panel document.

use crate::grafana::mapping::FieldMapping;
use crate::grafana::styles::{
    AxisPlacement, ColorMode, DrawStyle, GradientMode, LineInterpolation, LineStyle, ScaleType,
    ShowPoints, StackingMode, ThresholdMode,
};
use crate::grafana::is_zero;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldConfig {
    pub defaults: FieldConfigDefaults,
}

/// Effective field configuration of a panel
///
/// Produced by merging registry defaults with request overrides. The
/// `Option` fields are nullable in the document itself and are omitted
/// when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfigDefaults {
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_value: Option<f64>,
    pub color: FieldColor,
    pub thresholds: Thresholds,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<FieldMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<FieldConfigCustom>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldColor {
    pub mode: ColorMode,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fixed_color: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub series_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thresholds {
    pub mode: ThresholdMode,
    pub steps: Vec<ThresholdStep>,
}

/// Color boundary; a step without a value is the base color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdStep {
    pub color: String,
    pub value: Option<f64>,
}

/// Timeseries-specific draw and axis settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfigCustom {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub axis_label: String,
    pub axis_placement: AxisPlacement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_soft_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_soft_max: Option<i64>,
    pub bar_alignment: i32,
    pub draw_style: DrawStyle,
    pub fill_opacity: u32,
    pub gradient_mode: GradientMode,
    pub hide_from: HideFrom,
    pub line_interpolation: LineInterpolation,
    pub line_style: LineStyleFill,
    pub line_width: u32,
    pub point_size: u32,
    pub scale_distribution: ScaleDistribution,
    pub show_points: ShowPoints,
    pub span_nulls: bool,
    pub stacking: Stacking,
    pub thresholds_style: ThresholdsStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HideFrom {
    pub legend: bool,
    pub tooltip: bool,
    pub viz: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyleFill {
    pub fill: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleDistribution {
    #[serde(rename = "type")]
    pub scale_type: ScaleType,
    /// Logarithm base; zero means unset
    #[serde(skip_serializing_if = "is_zero")]
    pub log: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stacking {
    pub group: String,
    pub mode: StackingMode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdsStyle {
    pub mode: String,
}

impl Default for ThresholdsStyle {
    fn default() -> Self {
        Self {
            mode: "off".to_string(),
        }
    }
}

impl Stacking {
    pub fn new(mode: StackingMode) -> Self {
        Self {
            group: "A".to_string(),
            mode,
        }
    }
}

