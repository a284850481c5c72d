//! Data query targets attached to a panel.

use crate::grafana::is_false;
use crate::grafana::styles::TargetFormat;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasourceType {
    Prometheus,
    CloudWatch,
}

/// Reference to the data source a target queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Datasource {
    #[serde(rename = "type")]
    pub kind: DatasourceType,
    pub uid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrometheusQuery {
    pub ref_id: String,
    pub datasource: Datasource,
    pub expr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub interval: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub legend_format: String,
    #[serde(skip_serializing_if = "is_false")]
    pub instant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<TargetFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudWatchQuery {
    pub ref_id: String,
    pub datasource: Datasource,
    pub namespace: String,
    pub metric_name: String,
    pub statistics: Vec<String>,
    pub dimensions: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_exact: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub period: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
}

/// A single entry of a panel's `targets` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Target {
    Prometheus(PrometheusQuery),
    CloudWatch(CloudWatchQuery),
}

impl Target {
    pub fn datasource(&self) -> &Datasource {
        match self {
            Target::Prometheus(query) => &query.datasource,
            Target::CloudWatch(query) => &query.datasource,
        }
    }

    pub fn ref_id(&self) -> &str {
        match self {
            Target::Prometheus(query) => &query.ref_id,
            Target::CloudWatch(query) => &query.ref_id,
        }
    }
}
