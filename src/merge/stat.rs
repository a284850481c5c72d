//! Stat section merges: reduce options, text size and layout.

use crate::defaults::{
    ReduceOptionDefaults, StatDefaults, StatGraphDefaults, StatSettings, TextSizeDefaults,
};
use crate::grafana::{StatOptions, StatReduceOptions, StatTextSize};
use crate::merge::{set, set_nullable, Overlay};
use crate::options::{ReduceOptions, StatGraphOptions, TextSizeOptions};

impl Overlay<ReduceOptions> for ReduceOptionDefaults {
    fn overlay(&mut self, overrides: &ReduceOptions) {
        set(&mut self.values, &overrides.values);
        set(&mut self.fields, &overrides.fields);
        set_nullable(&mut self.limit, &overrides.limit);
        set(&mut self.calculation, &overrides.calculation);
    }
}

impl Overlay<TextSizeOptions> for TextSizeDefaults {
    fn overlay(&mut self, overrides: &TextSizeOptions) {
        set_nullable(&mut self.title, &overrides.title);
        set_nullable(&mut self.value, &overrides.value);
    }
}

impl Overlay<StatGraphOptions> for StatGraphDefaults {
    fn overlay(&mut self, overrides: &StatGraphOptions) {
        set(&mut self.orientation, &overrides.orientation);
        set(&mut self.text_mode, &overrides.text_mode);
        set(&mut self.color_mode, &overrides.color_mode);
        set(&mut self.graph_mode, &overrides.graph_mode);
        set(&mut self.text_alignment, &overrides.text_alignment);
    }
}

impl Overlay<StatSettings> for StatDefaults {
    fn overlay(&mut self, settings: &StatSettings) {
        self.field.overlay_all(settings.field.as_slice());
        self.reduce_options
            .overlay_all(settings.reduce_options.as_slice());
        self.text_size.overlay_all(settings.text_size.as_slice());
        self.graph.overlay_all(settings.graph.as_slice());
    }
}

/// Panel options of a stat panel
pub fn merge_stat_options(
    defaults: &StatDefaults,
    reduce_blocks: &[ReduceOptions],
    text_size_blocks: &[TextSizeOptions],
    graph_blocks: &[StatGraphOptions],
) -> StatOptions {
    let mut reduce = defaults.reduce_options.clone();
    reduce.overlay_all(reduce_blocks);

    let mut text_size = defaults.text_size.clone();
    text_size.overlay_all(text_size_blocks);

    let mut graph = defaults.graph.clone();
    graph.overlay_all(graph_blocks);

    StatOptions {
        reduce_options: StatReduceOptions {
            values: reduce.values,
            fields: reduce.fields,
            limit: reduce.limit,
            calcs: vec![reduce.calculation],
        },
        orientation: graph.orientation,
        text: StatTextSize {
            title_size: text_size.title,
            value_size: text_size.value,
        },
        text_mode: graph.text_mode,
        color_mode: graph.color_mode,
        graph_mode: graph.graph_mode,
        justify_mode: graph.text_alignment,
    }
}
