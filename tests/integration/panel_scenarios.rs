//! End-to-end panel rendering scenarios

use gdash::defaults::Defaults;
use gdash::grafana::FieldConfigDefaults;
use gdash::options::{FieldOptions, PrometheusTarget, RowGraphOptions, TargetGroup};
use gdash::panel::{hashcode, PanelRenderer, PanelRequest, RowRequest, TimeseriesRequest};
use serde_json::{json, Value};

const EXPANDED_ROW: &str = r#"{
  "editable": false,
  "error": false,
  "gridPos": {},
  "id": 0,
  "isNew": true,
  "span": 12,
  "title": "Test",
  "transparent": false,
  "type": "row",
  "panels": null,
  "collapsed": false
}"#;

fn prometheus_request() -> TimeseriesRequest {
    TimeseriesRequest {
        targets: vec![TargetGroup {
            prometheus: vec![PrometheusTarget {
                uid: "x".to_string(),
                expr: "up".to_string(),
                instant: None,
                format: None,
                ref_id: Some("A".to_string()),
                min_interval: None,
                legend_format: None,
            }],
            cloudwatch: Vec::new(),
        }],
        ..TimeseriesRequest::new("Test")
    }
}

fn field_config(json: &str) -> Value {
    let document: Value = serde_json::from_str(json).unwrap();
    document["fieldConfig"]["defaults"].clone()
}

#[test]
fn test_row_without_overrides() {
    let rendered = PanelRenderer::default()
        .render(&PanelRequest::Row(RowRequest::new("Test")))
        .unwrap();

    assert_eq!(rendered.json, EXPANDED_ROW);
    assert_eq!(rendered.id, "2614188405");
}

#[test]
fn test_row_collapsed_differs_only_in_collapsed() {
    let renderer = PanelRenderer::default();
    let expanded = renderer.row(&RowRequest::new("Test")).unwrap();
    let collapsed = renderer
        .row(&RowRequest {
            graph: vec![RowGraphOptions {
                collapsed: Some(true),
            }],
            ..RowRequest::new("Test")
        })
        .unwrap();

    assert_eq!(
        collapsed.json,
        expanded
            .json
            .replace("\"collapsed\": false", "\"collapsed\": true")
    );
    assert_ne!(collapsed.id, expanded.id);
}

#[test]
fn test_timeseries_with_one_prometheus_target() {
    let renderer = PanelRenderer::default();
    let rendered = renderer.timeseries(&prometheus_request()).unwrap();
    let document: Value = serde_json::from_str(&rendered.json).unwrap();

    assert_eq!(document["type"], "timeseries");
    assert_eq!(
        document["targets"],
        json!([{
            "refId": "A",
            "datasource": {"type": "prometheus", "uid": "x"},
            "expr": "up"
        }])
    );

    let mut expected = serde_json::to_value(FieldConfigDefaults::from(
        renderer.defaults().timeseries().field.clone(),
    ))
    .unwrap();
    let mut actual = field_config(&rendered.json);
    actual.as_object_mut().unwrap().remove("custom");
    expected.as_object_mut().unwrap().remove("custom");
    assert_eq!(actual, expected);
}

#[test]
fn test_unit_override_keeps_everything_else() {
    let renderer = PanelRenderer::default();
    let baseline = renderer.timeseries(&prometheus_request()).unwrap();
    let overridden = renderer
        .timeseries(&TimeseriesRequest {
            field: vec![FieldOptions {
                unit: Some("reqps".to_string()),
                ..Default::default()
            }],
            ..prometheus_request()
        })
        .unwrap();

    let mut expected = field_config(&baseline.json);
    expected["unit"] = json!("reqps");
    assert_eq!(field_config(&overridden.json), expected);
}

#[test]
fn test_rendering_is_deterministic() {
    let renderer = PanelRenderer::new(std::sync::Arc::new(Defaults::builtin()));
    let first = renderer.timeseries(&prometheus_request()).unwrap();
    let second = renderer.timeseries(&prometheus_request()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.id, hashcode(first.json.as_bytes()).to_string());
}

#[test]
fn test_timeseries_document_key_order() {
    let rendered = PanelRenderer::default()
        .timeseries(&prometheus_request())
        .unwrap();

    let keys = [
        "\"editable\"",
        "\"gridPos\"",
        "\"isNew\"",
        "\"span\"",
        "\"type\": \"timeseries\"",
        "\"targets\"",
        "\"options\"",
        "\"fieldConfig\"",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|key| rendered.json.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}
