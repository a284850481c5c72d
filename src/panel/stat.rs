//! Stat panels.

use crate::defaults::StatDefaults;
use crate::error::PanelError;
use crate::grafana::{CommonPanel, FieldConfig, Panel, PanelType, StatPanel};
use crate::merge::{merge_field_config, merge_stat_options};
use crate::options::validate::{check_field, check_targets, Violations};
use crate::options::{
    one_or_many, FieldOptions, ReduceOptions, StatGraphOptions, TargetGroup, TextSizeOptions,
};
use crate::translate::translate_targets;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub targets: Vec<TargetGroup>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub field: Vec<FieldOptions>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub reduce_options: Vec<ReduceOptions>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub text_size: Vec<TextSizeOptions>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub graph: Vec<StatGraphOptions>,
}

impl StatRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), PanelError> {
        let mut violations = Violations::new();
        check_targets(&mut violations, &self.targets);
        check_field(&mut violations, &self.field);
        violations.at_most_one("reduce_options", &self.reduce_options);
        violations.at_most_one("text_size", &self.text_size);
        violations.at_most_one("graph", &self.graph);
        violations.into_result()
    }
}

/// Stat document for `request`; stat panels carry no `custom` field section
pub fn build(defaults: &StatDefaults, request: &StatRequest) -> Panel<StatPanel> {
    let targets = translate_targets(&request.targets);
    let field = merge_field_config(&defaults.field, &request.field);
    let options = merge_stat_options(
        defaults,
        &request.reduce_options,
        &request.text_size,
        &request.graph,
    );

    debug!(title = %request.title, targets = targets.len(), "Assembled stat panel");

    Panel {
        common: CommonPanel::new(PanelType::Stat, &request.title, request.description.as_deref()),
        body: StatPanel {
            targets,
            options,
            field_config: FieldConfig { defaults: field },
        },
    }
}
