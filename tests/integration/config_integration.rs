//! Integration tests for Configuration System

use super::test_utils::{TestWorkspace, ENV_MUTEX};
use gdash::config::{ConfigLoader, GdashConfig};
use gdash::grafana::styles::{ColorMode, DrawStyle, StatGraphMode};
use gdash::Defaults;

#[test]
fn test_workspace_config_feeds_registry() {
    let workspace = TestWorkspace::new();
    workspace.write_config(
        r#"
[defaults.timeseries.graph]
draw_style = "bars"
line_width = 2

[defaults.timeseries.field.color]
mode = "fixed"
fixed_color = "blue"

[defaults.stat.graph]
graph_mode = "none"
"#,
    );

    let config = ConfigLoader::load_with_global(workspace.root(), None).unwrap();
    assert!(config.validate().is_ok());

    let registry = config.registry();
    assert_eq!(registry.timeseries().graph.draw_style, DrawStyle::Bars);
    assert_eq!(registry.timeseries().graph.line_width, 2);
    assert_eq!(registry.timeseries().graph.point_size, 5);
    assert_eq!(registry.timeseries().field.color.mode, ColorMode::Fixed);
    assert_eq!(registry.timeseries().field.color.fixed_color, "blue");
    assert_eq!(registry.timeseries().field.color.series_by, "last");
    assert_eq!(registry.stat().graph.graph_mode, StatGraphMode::None);
    assert_eq!(registry.row(), Defaults::builtin().row());
}

#[test]
fn test_env_specific_file_overrides_base() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let workspace = TestWorkspace::new();
    workspace.write_config("[defaults.timeseries.field]\nunit = \"s\"\n");
    workspace.write(
        "config/staging.toml",
        "[defaults.timeseries.field]\nunit = \"ms\"\n",
    );

    std::env::set_var("GDASH_ENV", "staging");
    let result = ConfigLoader::load_with_global(workspace.root(), None);
    std::env::remove_var("GDASH_ENV");

    let registry = result.unwrap().registry();
    assert_eq!(registry.timeseries().field.unit, "ms");
}

#[test]
fn test_environment_overrides_files() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let workspace = TestWorkspace::new();
    workspace.write_config("[logging]\nlevel = \"warn\"\n");

    std::env::set_var("GDASH__LOGGING__LEVEL", "debug");
    let result = ConfigLoader::load_with_global(workspace.root(), None);
    std::env::remove_var("GDASH__LOGGING__LEVEL");

    assert_eq!(result.unwrap().logging.level, "debug");
}

#[test]
fn test_threshold_steps_from_config() {
    let workspace = TestWorkspace::new();
    let path = workspace.write(
        "gdash.toml",
        r#"
[defaults.timeseries.field.thresholds]
mode = "percentage"

[[defaults.timeseries.field.thresholds.step]]
color = "green"

[[defaults.timeseries.field.thresholds.step]]
color = "red"
value = 80
"#,
    );

    let registry = ConfigLoader::load_from_file(&path).unwrap().registry();
    let steps = &registry.timeseries().field.thresholds.steps;
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].value, None);
    assert_eq!(steps[1].color, "red");
    assert_eq!(steps[1].value, Some(80.0));
}

#[test]
fn test_unknown_enum_value_fails_to_load() {
    let workspace = TestWorkspace::new();
    let path = workspace.write(
        "gdash.toml",
        "[defaults.timeseries.graph]\ndraw_style = \"sparkle\"\n",
    );

    assert!(ConfigLoader::load_from_file(&path).is_err());
}

#[test]
fn test_default_config_matches_builtin() {
    assert_eq!(GdashConfig::default().registry(), Defaults::builtin());
}
