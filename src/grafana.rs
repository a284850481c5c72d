//! Grafana Document Model
//!
//! Typed shapes of the panel JSON accepted by the Grafana dashboard API.
//! Field order in these structs is the key order of the emitted document,
//! and every map is a `BTreeMap`, so serialization is canonical.

pub mod field_config;
pub mod mapping;
pub mod panel;
pub mod styles;
pub mod target;

pub use field_config::{
    FieldColor, FieldConfig, FieldConfigCustom, FieldConfigDefaults, ThresholdStep, Thresholds,
};
pub use mapping::{FieldMapping, MappingResult, RangeMapping, RegexMapping, SpecialMapping};
pub use panel::{
    CommonPanel, GridPos, Panel, PanelType, RowPanel, StatOptions, StatPanel, StatReduceOptions,
    StatTextSize, TimeseriesLegendOptions, TimeseriesOptions, TimeseriesPanel,
    TimeseriesTooltipOptions,
};
pub use target::{CloudWatchQuery, Datasource, DatasourceType, PrometheusQuery, Target};

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) fn is_zero(value: &u32) -> bool {
    *value == 0
}
