//! Timeseries-only blocks: axis, graph, legend and tooltip.

use crate::grafana::styles::{
    AxisPlacement, DrawStyle, GradientMode, LegendDisplayMode, LegendPlacement,
    LineInterpolation, LineStyle, ScaleType, ShowPoints, StackingMode, TooltipMode,
};
use crate::options::one_or_many;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    pub label: Option<String>,
    pub placement: Option<AxisPlacement>,
    pub soft_min: Option<i64>,
    pub soft_max: Option<i64>,
    #[serde(deserialize_with = "one_or_many")]
    pub scale: Vec<ScaleOptions>,
}

/// Y-axis scale; a log scale takes a base of 2 or 10
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScaleOptions {
    #[serde(rename = "type")]
    pub scale_type: ScaleType,
    #[serde(default)]
    pub log: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    pub draw_style: Option<DrawStyle>,
    pub line_interpolation: Option<LineInterpolation>,
    pub line_width: Option<u32>,
    pub fill_opacity: Option<u32>,
    pub gradient_mode: Option<GradientMode>,
    pub line_style: Option<LineStyle>,
    pub span_nulls: Option<bool>,
    pub show_points: Option<ShowPoints>,
    pub point_size: Option<u32>,
    pub stack_series: Option<StackingMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    /// Standard calculations shown in the legend (min, max, mean, ...)
    pub calculations: Vec<String>,
    pub display_mode: Option<LegendDisplayMode>,
    pub placement: Option<LegendPlacement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TooltipOptions {
    pub mode: TooltipMode,
}
