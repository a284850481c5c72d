//! Panel renderer: shared registry plus per-kind dispatch.

use crate::defaults::Defaults;
use crate::error::PanelError;
use crate::panel::document::{render, RenderedPanel};
use crate::panel::row::{self, RowRequest};
use crate::panel::stat::{self, StatRequest};
use crate::panel::timeseries::{self, TimeseriesRequest};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Row,
    Timeseries,
    Stat,
}

impl PanelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::Row => "row",
            PanelKind::Timeseries => "timeseries",
            PanelKind::Stat => "stat",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelKind {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(PanelKind::Row),
            "timeseries" => Ok(PanelKind::Timeseries),
            "stat" => Ok(PanelKind::Stat),
            other => Err(PanelError::Validation(format!(
                "unknown panel kind '{}' (expected row, timeseries or stat)",
                other
            ))),
        }
    }
}

/// A request for any panel kind, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PanelRequest {
    Row(RowRequest),
    Timeseries(TimeseriesRequest),
    Stat(StatRequest),
}

impl PanelRequest {
    pub fn kind(&self) -> PanelKind {
        match self {
            PanelRequest::Row(_) => PanelKind::Row,
            PanelRequest::Timeseries(_) => PanelKind::Timeseries,
            PanelRequest::Stat(_) => PanelKind::Stat,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            PanelRequest::Row(request) => &request.title,
            PanelRequest::Timeseries(request) => &request.title,
            PanelRequest::Stat(request) => &request.title,
        }
    }

    pub fn validate(&self) -> Result<(), PanelError> {
        match self {
            PanelRequest::Row(request) => request.validate(),
            PanelRequest::Timeseries(request) => request.validate(),
            PanelRequest::Stat(request) => request.validate(),
        }
    }
}

/// Renders panel requests against one shared defaults registry
#[derive(Debug, Clone)]
pub struct PanelRenderer {
    defaults: Arc<Defaults>,
}

impl PanelRenderer {
    pub fn new(defaults: Arc<Defaults>) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn row(&self, request: &RowRequest) -> Result<RenderedPanel, PanelError> {
        render(&row::build(self.defaults.row(), request))
    }

    pub fn timeseries(&self, request: &TimeseriesRequest) -> Result<RenderedPanel, PanelError> {
        render(&timeseries::build(self.defaults.timeseries(), request))
    }

    pub fn stat(&self, request: &StatRequest) -> Result<RenderedPanel, PanelError> {
        render(&stat::build(self.defaults.stat(), request))
    }

    /// Validate and render any request
    ///
    /// Validation failures and serialization failures are returned without
    /// any partial output.
    pub fn render(&self, request: &PanelRequest) -> Result<RenderedPanel, PanelError> {
        request.validate()?;
        debug!(kind = %request.kind(), title = request.title(), "Rendering panel");

        let rendered = match request {
            PanelRequest::Row(request) => self.row(request)?,
            PanelRequest::Timeseries(request) => self.timeseries(request)?,
            PanelRequest::Stat(request) => self.stat(request)?,
        };

        info!(
            kind = %request.kind(),
            id = %rendered.id,
            bytes = rendered.json.len(),
            "Rendered panel"
        );
        Ok(rendered)
    }
}

impl Default for PanelRenderer {
    fn default() -> Self {
        Self::new(Arc::new(Defaults::builtin()))
    }
}
