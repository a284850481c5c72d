//! Provider-level settings
//!
//! The `[defaults]` section of the configuration file. It reuses the request
//! override blocks, so a provider setting and a request override for the same
//! field follow identical rules; the provider layer simply sits in between.

use crate::options::{
    AxisOptions, FieldOptions, GraphOptions, LegendOptions, ReduceOptions, RowGraphOptions,
    StatGraphOptions, TextSizeOptions, TooltipOptions,
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultsSettings {
    pub row: Option<RowSettings>,
    pub timeseries: Option<TimeseriesSettings>,
    pub stat: Option<StatSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RowSettings {
    pub graph: Option<RowGraphOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimeseriesSettings {
    pub legend: Option<LegendOptions>,
    pub tooltip: Option<TooltipOptions>,
    pub field: Option<FieldOptions>,
    pub axis: Option<AxisOptions>,
    pub graph: Option<GraphOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatSettings {
    pub field: Option<FieldOptions>,
    pub reduce_options: Option<ReduceOptions>,
    pub text_size: Option<TextSizeOptions>,
    pub graph: Option<StatGraphOptions>,
}
