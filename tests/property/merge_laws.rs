//! Overlay laws over the field, axis and graph sections

use gdash::defaults::{
    AxisDefaults, ColorDefaults, FieldDefaults, GraphDefaults, ScaleDefaults, ThresholdDefaults,
};
use gdash::grafana::styles::{
    AxisPlacement, ColorMode, DrawStyle, GradientMode, LineInterpolation, LineStyle, ScaleType,
    ShowPoints, StackingMode, ThresholdMode,
};
use gdash::grafana::{FieldConfigDefaults, ThresholdStep};
use gdash::merge::{merge_custom, merge_field_config};
use gdash::options::{
    AxisOptions, ColorOptions, FieldOptions, GraphOptions, MappingOptions, ScaleOptions,
    ThresholdOptions, ThresholdStepOptions, ValueMappingOptions,
};
use gdash::translate::translate_mappings;
use proptest::prelude::*;

fn color_mode() -> impl Strategy<Value = ColorMode> {
    prop_oneof![
        Just(ColorMode::Fixed),
        Just(ColorMode::Thresholds),
        Just(ColorMode::PaletteClassic),
        Just(ColorMode::ContinuousGrYlRd),
        Just(ColorMode::ContinuousBlues),
    ]
}

fn threshold_mode() -> impl Strategy<Value = ThresholdMode> {
    prop_oneof![Just(ThresholdMode::Absolute), Just(ThresholdMode::Percentage)]
}

fn draw_style() -> impl Strategy<Value = DrawStyle> {
    prop_oneof![Just(DrawStyle::Line), Just(DrawStyle::Bars), Just(DrawStyle::Points)]
}

fn line_interpolation() -> impl Strategy<Value = LineInterpolation> {
    prop_oneof![
        Just(LineInterpolation::Linear),
        Just(LineInterpolation::Smooth),
        Just(LineInterpolation::StepBefore),
        Just(LineInterpolation::StepAfter),
    ]
}

fn gradient_mode() -> impl Strategy<Value = GradientMode> {
    prop_oneof![
        Just(GradientMode::None),
        Just(GradientMode::Opacity),
        Just(GradientMode::Hue),
        Just(GradientMode::Scheme),
    ]
}

fn line_style() -> impl Strategy<Value = LineStyle> {
    prop_oneof![Just(LineStyle::Solid), Just(LineStyle::Dash), Just(LineStyle::Dots)]
}

fn show_points() -> impl Strategy<Value = ShowPoints> {
    prop_oneof![Just(ShowPoints::Auto), Just(ShowPoints::Never), Just(ShowPoints::Always)]
}

fn stacking() -> impl Strategy<Value = StackingMode> {
    prop_oneof![
        Just(StackingMode::None),
        Just(StackingMode::Normal),
        Just(StackingMode::Percent)
    ]
}

fn axis_placement() -> impl Strategy<Value = AxisPlacement> {
    prop_oneof![
        Just(AxisPlacement::Auto),
        Just(AxisPlacement::Left),
        Just(AxisPlacement::Right),
        Just(AxisPlacement::Hidden),
    ]
}

fn scale_type() -> impl Strategy<Value = ScaleType> {
    prop_oneof![Just(ScaleType::Linear), Just(ScaleType::Log)]
}

fn steps() -> impl Strategy<Value = Vec<ThresholdStep>> {
    proptest::collection::vec(
        ("[a-z]{3,8}", proptest::option::of(-100.0f64..100.0))
            .prop_map(|(color, value)| ThresholdStep { color, value }),
        1..5,
    )
}

fn value_mappings() -> impl Strategy<Value = MappingOptions> {
    proptest::collection::vec(
        ("[a-z0-9]{1,6}", proptest::option::of("[A-Za-z ]{1,10}")).prop_map(
            |(value, display_text)| ValueMappingOptions {
                value,
                display_text,
                color: None,
            },
        ),
        1..4,
    )
    .prop_map(|value| MappingOptions {
        value,
        ..Default::default()
    })
}

prop_compose! {
    fn field_defaults()(
        unit in "[a-z]{0,8}",
        decimals in proptest::option::of(0u32..6),
        min in proptest::option::of(-1000.0f64..1000.0),
        max in proptest::option::of(-1000.0f64..1000.0),
        no_value in proptest::option::of(-10.0f64..10.0),
        mode in color_mode(),
        fixed_color in "[a-z]{0,8}",
        series_by in "[a-z]{0,6}",
        step_mode in threshold_mode(),
        threshold_steps in steps(),
        mappings in proptest::option::of(value_mappings()),
    ) -> FieldDefaults {
        FieldDefaults {
            unit,
            decimals,
            min,
            max,
            no_value,
            color: ColorDefaults { mode, fixed_color, series_by },
            thresholds: ThresholdDefaults { mode: step_mode, steps: threshold_steps },
            mappings: mappings.as_ref().map(translate_mappings).unwrap_or_default(),
        }
    }
}

prop_compose! {
    fn full_field_options()(
        unit in "[a-z]{1,8}",
        decimals in 0u32..6,
        min in -1000.0f64..1000.0,
        max in -1000.0f64..1000.0,
        no_value in -10.0f64..10.0,
        mode in color_mode(),
        fixed_color in "[a-z]{1,8}",
        series_by in "[a-z]{1,6}",
        step_mode in threshold_mode(),
        threshold_steps in steps(),
        mappings in value_mappings(),
    ) -> FieldOptions {
        FieldOptions {
            unit: Some(unit),
            decimals: Some(decimals),
            min: Some(min),
            max: Some(max),
            no_value: Some(no_value),
            color: vec![ColorOptions {
                mode: Some(mode),
                fixed_color: Some(fixed_color),
                series_by: Some(series_by),
            }],
            mappings: vec![mappings],
            thresholds: vec![ThresholdOptions {
                mode: Some(step_mode),
                step: threshold_steps
                    .into_iter()
                    .map(|step| ThresholdStepOptions { color: step.color, value: step.value })
                    .collect(),
            }],
        }
    }
}

prop_compose! {
    fn axis_defaults()(
        label in "[a-z ]{0,10}",
        placement in axis_placement(),
        soft_min in proptest::option::of(-100i64..0),
        soft_max in proptest::option::of(0i64..100),
        scale_type in scale_type(),
        log in prop_oneof![Just(0u32), Just(2u32), Just(10u32)],
    ) -> AxisDefaults {
        AxisDefaults {
            label,
            placement,
            soft_min,
            soft_max,
            scale: ScaleDefaults { scale_type, log },
        }
    }
}

prop_compose! {
    fn full_axis_options()(
        label in "[a-z ]{1,10}",
        placement in axis_placement(),
        soft_min in -100i64..0,
        soft_max in 0i64..100,
        scale_type in scale_type(),
        log in prop_oneof![Just(2u32), Just(10u32)],
    ) -> AxisOptions {
        AxisOptions {
            label: Some(label),
            placement: Some(placement),
            soft_min: Some(soft_min),
            soft_max: Some(soft_max),
            scale: vec![ScaleOptions { scale_type, log: Some(log) }],
        }
    }
}

prop_compose! {
    fn graph_defaults()(
        draw_style in draw_style(),
        line_interpolation in line_interpolation(),
        line_width in 0u32..10,
        fill_opacity in 0u32..100,
        gradient_mode in gradient_mode(),
        line_style in line_style(),
        span_nulls in any::<bool>(),
        show_points in show_points(),
        point_size in 1u32..20,
        stack_series in stacking(),
    ) -> GraphDefaults {
        GraphDefaults {
            draw_style,
            line_interpolation,
            line_width,
            fill_opacity,
            gradient_mode,
            line_style,
            span_nulls,
            show_points,
            point_size,
            stack_series,
        }
    }
}

fn full_graph_options() -> impl Strategy<Value = GraphOptions> {
    graph_defaults().prop_map(|graph| GraphOptions {
        draw_style: Some(graph.draw_style),
        line_interpolation: Some(graph.line_interpolation),
        line_width: Some(graph.line_width),
        fill_opacity: Some(graph.fill_opacity),
        gradient_mode: Some(graph.gradient_mode),
        line_style: Some(graph.line_style),
        span_nulls: Some(graph.span_nulls),
        show_points: Some(graph.show_points),
        point_size: Some(graph.point_size),
        stack_series: Some(graph.stack_series),
    })
}

proptest! {
    #[test]
    fn prop_no_blocks_is_identity(defaults in field_defaults()) {
        prop_assert_eq!(
            merge_field_config(&defaults, &[]),
            FieldConfigDefaults::from(defaults.clone())
        );
        prop_assert_eq!(
            merge_field_config(&defaults, &[FieldOptions::default()]),
            FieldConfigDefaults::from(defaults)
        );
    }

    #[test]
    fn prop_full_field_block_replaces_every_default(
        defaults in field_defaults(),
        block in full_field_options(),
    ) {
        let merged = merge_field_config(&defaults, &[block.clone()]);
        let color = &block.color[0];
        let thresholds = &block.thresholds[0];

        prop_assert_eq!(Some(merged.unit), block.unit.clone());
        prop_assert_eq!(merged.decimals, block.decimals);
        prop_assert_eq!(merged.min, block.min);
        prop_assert_eq!(merged.max, block.max);
        prop_assert_eq!(merged.no_value, block.no_value);
        prop_assert_eq!(Some(merged.color.mode), color.mode);
        prop_assert_eq!(Some(merged.color.fixed_color), color.fixed_color.clone());
        prop_assert_eq!(Some(merged.color.series_by), color.series_by.clone());
        prop_assert_eq!(Some(merged.thresholds.mode), thresholds.mode);
        prop_assert_eq!(
            merged.thresholds.steps,
            thresholds
                .step
                .iter()
                .map(|step| ThresholdStep { color: step.color.clone(), value: step.value })
                .collect::<Vec<_>>()
        );
        prop_assert_eq!(merged.mappings, translate_mappings(&block.mappings[0]));
        prop_assert!(merged.custom.is_none());
    }

    #[test]
    fn prop_full_custom_blocks_replace_every_default(
        axis_defaults in axis_defaults(),
        graph_defaults in graph_defaults(),
        axis in full_axis_options(),
        graph in full_graph_options(),
    ) {
        let custom = merge_custom(
            &axis_defaults,
            &graph_defaults,
            &[axis.clone()],
            &[graph.clone()],
        );
        let scale = &axis.scale[0];

        prop_assert_eq!(Some(custom.axis_label), axis.label.clone());
        prop_assert_eq!(Some(custom.axis_placement), axis.placement);
        prop_assert_eq!(custom.axis_soft_min, axis.soft_min);
        prop_assert_eq!(custom.axis_soft_max, axis.soft_max);
        prop_assert_eq!(custom.scale_distribution.scale_type, scale.scale_type);
        prop_assert_eq!(Some(custom.scale_distribution.log), scale.log);

        prop_assert_eq!(Some(custom.draw_style), graph.draw_style);
        prop_assert_eq!(Some(custom.line_interpolation), graph.line_interpolation);
        prop_assert_eq!(Some(custom.line_width), graph.line_width);
        prop_assert_eq!(Some(custom.fill_opacity), graph.fill_opacity);
        prop_assert_eq!(Some(custom.gradient_mode), graph.gradient_mode);
        prop_assert_eq!(Some(custom.line_style.fill), graph.line_style);
        prop_assert_eq!(Some(custom.span_nulls), graph.span_nulls);
        prop_assert_eq!(Some(custom.show_points), graph.show_points);
        prop_assert_eq!(Some(custom.point_size), graph.point_size);
        prop_assert_eq!(Some(custom.stacking.mode), graph.stack_series);
    }

    #[test]
    fn prop_no_custom_blocks_is_identity(
        axis_defaults in axis_defaults(),
        graph_defaults in graph_defaults(),
    ) {
        let custom = merge_custom(&axis_defaults, &graph_defaults, &[], &[]);

        prop_assert_eq!(custom.axis_label, axis_defaults.label);
        prop_assert_eq!(custom.axis_placement, axis_defaults.placement);
        prop_assert_eq!(custom.axis_soft_min, axis_defaults.soft_min);
        prop_assert_eq!(custom.axis_soft_max, axis_defaults.soft_max);
        prop_assert_eq!(custom.scale_distribution.scale_type, axis_defaults.scale.scale_type);
        prop_assert_eq!(custom.scale_distribution.log, axis_defaults.scale.log);
        prop_assert_eq!(custom.draw_style, graph_defaults.draw_style);
        prop_assert_eq!(custom.line_interpolation, graph_defaults.line_interpolation);
        prop_assert_eq!(custom.line_width, graph_defaults.line_width);
        prop_assert_eq!(custom.fill_opacity, graph_defaults.fill_opacity);
        prop_assert_eq!(custom.gradient_mode, graph_defaults.gradient_mode);
        prop_assert_eq!(custom.line_style.fill, graph_defaults.line_style);
        prop_assert_eq!(custom.span_nulls, graph_defaults.span_nulls);
        prop_assert_eq!(custom.show_points, graph_defaults.show_points);
        prop_assert_eq!(custom.point_size, graph_defaults.point_size);
        prop_assert_eq!(custom.stacking.mode, graph_defaults.stack_series);
    }
}
