//! Timeseries defaults.

use crate::defaults::field::FieldDefaults;
use crate::grafana::styles::{
    AxisPlacement, DrawStyle, GradientMode, LegendDisplayMode, LegendPlacement,
    LineInterpolation, LineStyle, ScaleType, ShowPoints, StackingMode, TooltipMode,
};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeseriesDefaults {
    pub legend: LegendDefaults,
    pub tooltip: TooltipDefaults,
    pub field: FieldDefaults,
    pub axis: AxisDefaults,
    pub graph: GraphDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendDefaults {
    pub calculations: Vec<String>,
    pub display_mode: LegendDisplayMode,
    pub placement: LegendPlacement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipDefaults {
    pub mode: TooltipMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisDefaults {
    pub label: String,
    pub placement: AxisPlacement,
    pub soft_min: Option<i64>,
    pub soft_max: Option<i64>,
    pub scale: ScaleDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleDefaults {
    pub scale_type: ScaleType,
    /// Logarithm base; zero leaves it out of the document
    pub log: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDefaults {
    pub draw_style: DrawStyle,
    pub line_interpolation: LineInterpolation,
    pub line_width: u32,
    pub fill_opacity: u32,
    pub gradient_mode: GradientMode,
    pub line_style: LineStyle,
    pub span_nulls: bool,
    pub show_points: ShowPoints,
    pub point_size: u32,
    pub stack_series: StackingMode,
}

impl Default for LegendDefaults {
    fn default() -> Self {
        Self {
            calculations: Vec::new(),
            display_mode: LegendDisplayMode::List,
            placement: LegendPlacement::Bottom,
        }
    }
}

impl Default for TooltipDefaults {
    fn default() -> Self {
        Self {
            mode: TooltipMode::Single,
        }
    }
}

impl Default for AxisDefaults {
    fn default() -> Self {
        Self {
            label: String::new(),
            placement: AxisPlacement::Auto,
            soft_min: None,
            soft_max: None,
            scale: ScaleDefaults::default(),
        }
    }
}

impl Default for ScaleDefaults {
    fn default() -> Self {
        Self {
            scale_type: ScaleType::Linear,
            log: 0,
        }
    }
}

impl Default for GraphDefaults {
    fn default() -> Self {
        Self {
            draw_style: DrawStyle::Line,
            line_interpolation: LineInterpolation::Linear,
            line_width: 1,
            fill_opacity: 0,
            gradient_mode: GradientMode::None,
            line_style: LineStyle::Solid,
            span_nulls: false,
            show_points: ShowPoints::Auto,
            point_size: 5,
            stack_series: StackingMode::None,
        }
    }
}
