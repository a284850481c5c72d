//! Target translation.

use crate::grafana::{CloudWatchQuery, Datasource, DatasourceType, PrometheusQuery, Target};
use crate::options::{CloudWatchTarget, PrometheusTarget, TargetGroup};
use std::collections::BTreeMap;
use tracing::debug;

/// Translate target groups into the document's `targets` list
///
/// Groups are walked in order; inside a group every Prometheus target comes
/// before every CloudWatch target, each in input order.
pub fn translate_targets(groups: &[TargetGroup]) -> Vec<Target> {
    let mut targets = Vec::with_capacity(groups.iter().map(TargetGroup::len).sum());

    for group in groups {
        targets.extend(group.prometheus.iter().map(prometheus));
        targets.extend(group.cloudwatch.iter().map(cloudwatch));
    }

    debug!(groups = groups.len(), targets = targets.len(), "Translated targets");
    targets
}

fn prometheus(target: &PrometheusTarget) -> Target {
    Target::Prometheus(PrometheusQuery {
        ref_id: target.ref_id.clone().unwrap_or_default(),
        datasource: Datasource {
            kind: DatasourceType::Prometheus,
            uid: target.uid.clone(),
        },
        expr: target.expr.clone(),
        interval: target.min_interval.clone().unwrap_or_default(),
        legend_format: target.legend_format.clone().unwrap_or_default(),
        instant: target.instant.unwrap_or(false),
        format: target.format,
    })
}

fn cloudwatch(target: &CloudWatchTarget) -> Target {
    // Later dimensions with the same name win.
    let dimensions: BTreeMap<String, String> = target
        .dimension
        .iter()
        .map(|dimension| (dimension.name.clone(), dimension.value.clone()))
        .collect();

    Target::CloudWatch(CloudWatchQuery {
        ref_id: target.ref_id.clone().unwrap_or_default(),
        datasource: Datasource {
            kind: DatasourceType::CloudWatch,
            uid: target.uid.clone(),
        },
        namespace: target.namespace.clone(),
        metric_name: target.metric_name.clone(),
        statistics: vec![target.statistic.clone()],
        dimensions,
        match_exact: target.match_exact,
        period: target.period.clone().unwrap_or_default(),
        region: target.region.clone().unwrap_or_default(),
        label: target.legend_format.clone().unwrap_or_default(),
    })
}
