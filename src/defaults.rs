//! Defaults Registry
//!
//! Concrete default settings for every panel kind. The registry is built once,
//! from the builtin table optionally overlaid with provider-level settings,
//! and is read-only afterwards. Renderers share it through an `Arc`.

pub mod field;
pub mod row;
pub mod settings;
pub mod stat;
pub mod timeseries;

pub use field::{ColorDefaults, FieldDefaults, ThresholdDefaults};
pub use row::RowDefaults;
pub use settings::{DefaultsSettings, RowSettings, StatSettings, TimeseriesSettings};
pub use stat::{ReduceOptionDefaults, StatDefaults, StatGraphDefaults, TextSizeDefaults};
pub use timeseries::{
    AxisDefaults, GraphDefaults, LegendDefaults, ScaleDefaults, TimeseriesDefaults,
    TooltipDefaults,
};

use crate::merge::Overlay;
use serde::Serialize;
use tracing::debug;

/// Per-panel-kind defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Defaults {
    row: RowDefaults,
    timeseries: TimeseriesDefaults,
    stat: StatDefaults,
}

impl Defaults {
    /// Builtin defaults with no provider-level settings applied
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Builtin defaults overlaid with provider-level settings
    pub fn from_settings(settings: &DefaultsSettings) -> Self {
        let mut defaults = Self::builtin();
        defaults.row.overlay_all(settings.row.as_slice());
        defaults.timeseries.overlay_all(settings.timeseries.as_slice());
        defaults.stat.overlay_all(settings.stat.as_slice());

        debug!(
            row = settings.row.is_some(),
            timeseries = settings.timeseries.is_some(),
            stat = settings.stat.is_some(),
            "Built defaults registry from provider settings"
        );

        defaults
    }

    pub fn row(&self) -> &RowDefaults {
        &self.row
    }

    pub fn timeseries(&self) -> &TimeseriesDefaults {
        &self.timeseries
    }

    pub fn stat(&self) -> &StatDefaults {
        &self.stat
    }
}
