//! Override Blocks
//!
//! Caller-supplied settings for one panel. Every scalar is an `Option`:
//! `None` inherits the value of the next-lower defaults layer, `Some`
//! replaces it. Blocks that the dashboard schema allows at most once are
//! still carried as lists of zero or one element.

pub mod field;
pub mod row;
pub mod stat;
pub mod target;
pub mod timeseries;
pub mod validate;

pub use field::{
    ColorOptions, FieldOptions, MappingOptions, RangeMappingOptions, RegexMappingOptions,
    SpecialMappingOptions, ThresholdOptions, ThresholdStepOptions, ValueMappingOptions,
};
pub use row::RowGraphOptions;
pub use stat::{ReduceOptions, StatGraphOptions, TextSizeOptions};
pub use target::{CloudWatchDimension, CloudWatchTarget, PrometheusTarget, TargetGroup};
pub use timeseries::{AxisOptions, GraphOptions, LegendOptions, ScaleOptions, TooltipOptions};

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Accepts a zero-or-one block written either as a single table or as a list
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(blocks) => blocks,
        OneOrMany::One(block) => vec![block],
    })
}
