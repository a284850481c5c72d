//! Field section merge.

use crate::defaults::{ColorDefaults, FieldDefaults, ThresholdDefaults};
use crate::grafana::{FieldColor, FieldConfigDefaults, FieldMapping, ThresholdStep, Thresholds};
use crate::merge::{set, set_nullable, Overlay};
use crate::options::{ColorOptions, FieldOptions, ThresholdOptions};
use crate::translate::translate_mappings;
use tracing::debug;

impl Overlay<FieldOptions> for FieldDefaults {
    fn overlay(&mut self, overrides: &FieldOptions) {
        set(&mut self.unit, &overrides.unit);
        set_nullable(&mut self.decimals, &overrides.decimals);
        set_nullable(&mut self.min, &overrides.min);
        set_nullable(&mut self.max, &overrides.max);
        set_nullable(&mut self.no_value, &overrides.no_value);

        self.color.overlay_all(&overrides.color);

        let mappings: Vec<FieldMapping> = overrides
            .mappings
            .iter()
            .flat_map(translate_mappings)
            .collect();
        if !mappings.is_empty() {
            self.mappings = mappings;
        }

        self.thresholds.overlay_all(&overrides.thresholds);
    }
}

impl Overlay<ColorOptions> for ColorDefaults {
    fn overlay(&mut self, overrides: &ColorOptions) {
        set(&mut self.mode, &overrides.mode);
        set(&mut self.fixed_color, &overrides.fixed_color);
        set(&mut self.series_by, &overrides.series_by);
    }
}

impl Overlay<ThresholdOptions> for ThresholdDefaults {
    fn overlay(&mut self, overrides: &ThresholdOptions) {
        set(&mut self.mode, &overrides.mode);

        // Steps replace the default list wholesale, never per step.
        if !overrides.step.is_empty() {
            self.steps = overrides
                .step
                .iter()
                .map(|step| ThresholdStep {
                    color: step.color.clone(),
                    value: step.value,
                })
                .collect();
        }
    }
}

impl From<FieldDefaults> for FieldConfigDefaults {
    fn from(field: FieldDefaults) -> Self {
        Self {
            unit: field.unit,
            decimals: field.decimals,
            min: field.min,
            max: field.max,
            no_value: field.no_value,
            color: FieldColor {
                mode: field.color.mode,
                fixed_color: field.color.fixed_color,
                series_by: field.color.series_by,
            },
            thresholds: Thresholds {
                mode: field.thresholds.mode,
                steps: field.thresholds.steps,
            },
            mappings: field.mappings,
            custom: None,
        }
    }
}

/// Effective field configuration for one request
///
/// Starts from `defaults` and applies the request's field block. The result
/// carries no `custom` section; panel kinds that have one attach it.
pub fn merge_field_config(defaults: &FieldDefaults, blocks: &[FieldOptions]) -> FieldConfigDefaults {
    let mut effective = defaults.clone();
    effective.overlay_all(blocks);

    debug!(
        blocks = blocks.len(),
        unit = %effective.unit,
        steps = effective.thresholds.steps.len(),
        mappings = effective.mappings.len(),
        "Merged field config"
    );

    FieldConfigDefaults::from(effective)
}
