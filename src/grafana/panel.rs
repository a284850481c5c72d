//! Panel documents: common header plus a per-kind body.

use crate::grafana::field_config::FieldConfig;
use crate::grafana::styles::{
    JustifyMode, LegendDisplayMode, LegendPlacement, Orientation, StatColorMode, StatGraphMode,
    StatTextMode, TooltipMode,
};
use crate::grafana::target::Target;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelType {
    Row,
    Timeseries,
    Stat,
}

/// Grid placement; left empty so the dashboard lays panels out itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GridPos {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<u32>,
}

/// Fields shared by every panel kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonPanel {
    pub editable: bool,
    pub error: bool,
    pub grid_pos: GridPos,
    pub id: u32,
    pub is_new: bool,
    pub span: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub transparent: bool,
    #[serde(rename = "type")]
    pub panel_type: PanelType,
}

impl CommonPanel {
    /// Header with the fixed values every generated panel starts from
    pub fn new(panel_type: PanelType, title: &str, description: Option<&str>) -> Self {
        Self {
            editable: false,
            error: false,
            grid_pos: GridPos::default(),
            id: 0,
            is_new: true,
            span: 12,
            title: title.to_string(),
            description: description.map(str::to_string),
            transparent: false,
            panel_type,
        }
    }
}

/// A complete panel document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel<B> {
    #[serde(flatten)]
    pub common: CommonPanel,
    #[serde(flatten)]
    pub body: B,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowPanel {
    /// Nested panels; generated rows never embed any
    pub panels: Option<Vec<serde_json::Value>>,
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeseriesPanel {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<Target>,
    pub options: TimeseriesOptions,
    pub field_config: FieldConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeseriesOptions {
    pub legend: TimeseriesLegendOptions,
    pub tooltip: TimeseriesTooltipOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeseriesLegendOptions {
    pub calcs: Vec<String>,
    pub display_mode: LegendDisplayMode,
    pub placement: LegendPlacement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeseriesTooltipOptions {
    pub mode: TooltipMode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatPanel {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<Target>,
    pub options: StatOptions,
    pub field_config: FieldConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatOptions {
    pub reduce_options: StatReduceOptions,
    pub orientation: Orientation,
    pub text: StatTextSize,
    pub text_mode: StatTextMode,
    pub color_mode: StatColorMode,
    pub graph_mode: StatGraphMode,
    pub justify_mode: JustifyMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatReduceOptions {
    pub values: bool,
    pub fields: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    pub calcs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatTextSize {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_size: Option<u32>,
}
