//! Timeseries section merges: axis, graph, legend and tooltip.

use crate::defaults::{
    AxisDefaults, GraphDefaults, LegendDefaults, ScaleDefaults, TimeseriesDefaults,
    TimeseriesSettings, TooltipDefaults,
};
use crate::grafana::field_config::{
    HideFrom, LineStyleFill, ScaleDistribution, Stacking, ThresholdsStyle,
};
use crate::grafana::{FieldConfigCustom, TimeseriesLegendOptions, TimeseriesTooltipOptions};
use crate::merge::{set, set_nullable, Overlay};
use crate::options::{AxisOptions, GraphOptions, LegendOptions, ScaleOptions, TooltipOptions};

impl Overlay<AxisOptions> for AxisDefaults {
    fn overlay(&mut self, overrides: &AxisOptions) {
        set(&mut self.label, &overrides.label);
        set(&mut self.placement, &overrides.placement);
        set_nullable(&mut self.soft_min, &overrides.soft_min);
        set_nullable(&mut self.soft_max, &overrides.soft_max);
        self.scale.overlay_all(&overrides.scale);
    }
}

impl Overlay<ScaleOptions> for ScaleDefaults {
    fn overlay(&mut self, overrides: &ScaleOptions) {
        self.scale_type = overrides.scale_type;
        set(&mut self.log, &overrides.log);
    }
}

impl Overlay<GraphOptions> for GraphDefaults {
    fn overlay(&mut self, overrides: &GraphOptions) {
        set(&mut self.draw_style, &overrides.draw_style);
        set(&mut self.line_interpolation, &overrides.line_interpolation);
        set(&mut self.line_width, &overrides.line_width);
        set(&mut self.fill_opacity, &overrides.fill_opacity);
        set(&mut self.gradient_mode, &overrides.gradient_mode);
        set(&mut self.line_style, &overrides.line_style);
        set(&mut self.span_nulls, &overrides.span_nulls);
        set(&mut self.show_points, &overrides.show_points);
        set(&mut self.point_size, &overrides.point_size);
        set(&mut self.stack_series, &overrides.stack_series);
    }
}

impl Overlay<LegendOptions> for LegendDefaults {
    fn overlay(&mut self, overrides: &LegendOptions) {
        if !overrides.calculations.is_empty() {
            self.calculations = overrides.calculations.clone();
        }
        set(&mut self.display_mode, &overrides.display_mode);
        set(&mut self.placement, &overrides.placement);
    }
}

impl Overlay<TooltipOptions> for TooltipDefaults {
    fn overlay(&mut self, overrides: &TooltipOptions) {
        self.mode = overrides.mode;
    }
}

impl Overlay<TimeseriesSettings> for TimeseriesDefaults {
    fn overlay(&mut self, settings: &TimeseriesSettings) {
        self.legend.overlay_all(settings.legend.as_slice());
        self.tooltip.overlay_all(settings.tooltip.as_slice());
        self.field.overlay_all(settings.field.as_slice());
        self.axis.overlay_all(settings.axis.as_slice());
        self.graph.overlay_all(settings.graph.as_slice());
    }
}

/// Draw and axis settings of a timeseries panel
///
/// Axis and graph blocks set disjoint fields, so the order in which the two
/// are applied does not matter.
pub fn merge_custom(
    axis: &AxisDefaults,
    graph: &GraphDefaults,
    axis_blocks: &[AxisOptions],
    graph_blocks: &[GraphOptions],
) -> FieldConfigCustom {
    let mut axis = axis.clone();
    axis.overlay_all(axis_blocks);

    let mut graph = graph.clone();
    graph.overlay_all(graph_blocks);

    FieldConfigCustom {
        axis_label: axis.label,
        axis_placement: axis.placement,
        axis_soft_min: axis.soft_min,
        axis_soft_max: axis.soft_max,
        bar_alignment: 0,
        draw_style: graph.draw_style,
        fill_opacity: graph.fill_opacity,
        gradient_mode: graph.gradient_mode,
        hide_from: HideFrom::default(),
        line_interpolation: graph.line_interpolation,
        line_style: LineStyleFill {
            fill: graph.line_style,
        },
        line_width: graph.line_width,
        point_size: graph.point_size,
        scale_distribution: ScaleDistribution {
            scale_type: axis.scale.scale_type,
            log: axis.scale.log,
        },
        show_points: graph.show_points,
        span_nulls: graph.span_nulls,
        stacking: Stacking::new(graph.stack_series),
        thresholds_style: ThresholdsStyle::default(),
    }
}

pub fn merge_legend(defaults: &LegendDefaults, blocks: &[LegendOptions]) -> TimeseriesLegendOptions {
    let mut legend = defaults.clone();
    legend.overlay_all(blocks);

    TimeseriesLegendOptions {
        calcs: legend.calculations,
        display_mode: legend.display_mode,
        placement: legend.placement,
    }
}

pub fn merge_tooltip(
    defaults: &TooltipDefaults,
    blocks: &[TooltipOptions],
) -> TimeseriesTooltipOptions {
    let mut tooltip = defaults.clone();
    tooltip.overlay_all(blocks);

    TimeseriesTooltipOptions { mode: tooltip.mode }
}
