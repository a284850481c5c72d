//! Row panels.

use crate::defaults::RowDefaults;
use crate::error::PanelError;
use crate::grafana::{CommonPanel, Panel, PanelType, RowPanel};
use crate::merge::Overlay;
use crate::options::validate::Violations;
use crate::options::{one_or_many, RowGraphOptions};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RowRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub graph: Vec<RowGraphOptions>,
}

impl RowRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), PanelError> {
        let mut violations = Violations::new();
        violations.at_most_one("graph", &self.graph);
        violations.into_result()
    }
}

/// Row document for `request`; rows never embed nested panels
pub fn build(defaults: &RowDefaults, request: &RowRequest) -> Panel<RowPanel> {
    let mut row = defaults.clone();
    row.overlay_all(&request.graph);

    Panel {
        common: CommonPanel::new(
            PanelType::Row,
            &request.title,
            request.description.as_deref(),
        ),
        body: RowPanel {
            panels: None,
            collapsed: row.collapsed,
        },
    }
}
