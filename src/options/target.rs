//! Target blocks: Prometheus and CloudWatch queries.

use crate::grafana::styles::TargetFormat;
use serde::Deserialize;

/// One `targets` block; both lists may be populated
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TargetGroup {
    pub prometheus: Vec<PrometheusTarget>,
    pub cloudwatch: Vec<CloudWatchTarget>,
}

impl TargetGroup {
    pub fn len(&self) -> usize {
        self.prometheus.len() + self.cloudwatch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrometheusTarget {
    /// Prometheus data source UID
    pub uid: String,
    pub expr: String,
    #[serde(default)]
    pub instant: Option<bool>,
    #[serde(default)]
    pub format: Option<TargetFormat>,
    #[serde(default)]
    pub ref_id: Option<String>,
    #[serde(default)]
    pub min_interval: Option<String>,
    #[serde(default)]
    pub legend_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CloudWatchTarget {
    /// CloudWatch data source UID
    pub uid: String,
    pub namespace: String,
    pub metric_name: String,
    pub statistic: String,
    #[serde(default, alias = "dimensions")]
    pub dimension: Vec<CloudWatchDimension>,
    #[serde(default)]
    pub match_exact: Option<bool>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub ref_id: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub legend_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CloudWatchDimension {
    pub name: String,
    pub value: String,
}
