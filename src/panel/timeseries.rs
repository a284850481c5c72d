//! Timeseries panels.

use crate::defaults::TimeseriesDefaults;
use crate::error::PanelError;
use crate::grafana::{
    CommonPanel, FieldConfig, Panel, PanelType, TimeseriesOptions, TimeseriesPanel,
};
use crate::merge::{merge_custom, merge_field_config, merge_legend, merge_tooltip};
use crate::options::validate::{check_axis, check_field, check_targets, Violations};
use crate::options::{
    one_or_many, AxisOptions, FieldOptions, GraphOptions, LegendOptions, TargetGroup, TooltipOptions,
};
use crate::translate::translate_targets;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimeseriesRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub targets: Vec<TargetGroup>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub legend: Vec<LegendOptions>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub tooltip: Vec<TooltipOptions>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub field: Vec<FieldOptions>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub axis: Vec<AxisOptions>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub graph: Vec<GraphOptions>,
}

impl TimeseriesRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Cardinality and range checks; reports every violation at once
    pub fn validate(&self) -> Result<(), PanelError> {
        let mut violations = Violations::new();
        check_targets(&mut violations, &self.targets);
        violations.at_most_one("legend", &self.legend);
        violations.at_most_one("tooltip", &self.tooltip);
        check_field(&mut violations, &self.field);
        check_axis(&mut violations, &self.axis);
        violations.at_most_one("graph", &self.graph);
        violations.into_result()
    }
}

pub fn build(defaults: &TimeseriesDefaults, request: &TimeseriesRequest) -> Panel<TimeseriesPanel> {
    let targets = translate_targets(&request.targets);

    let mut field = merge_field_config(&defaults.field, &request.field);
    field.custom = Some(merge_custom(
        &defaults.axis,
        &defaults.graph,
        &request.axis,
        &request.graph,
    ));

    let options = TimeseriesOptions {
        legend: merge_legend(&defaults.legend, &request.legend),
        tooltip: merge_tooltip(&defaults.tooltip, &request.tooltip),
    };

    debug!(title = %request.title, targets = targets.len(), "Assembled timeseries panel");

    Panel {
        common: CommonPanel::new(
            PanelType::Timeseries,
            &request.title,
            request.description.as_deref(),
        ),
        body: TimeseriesPanel {
            targets,
            options,
            field_config: FieldConfig { defaults: field },
        },
    }
}
