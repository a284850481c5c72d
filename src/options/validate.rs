//! Request validation
//!
//! Cardinality and range checks that the dashboard schema imposes on
//! override blocks. Enum membership is already enforced by deserialization,
//! so only list sizes and free-form numeric ranges are checked here. The
//! merge engine assumes a request passed these checks.

use crate::error::PanelError;
use crate::options::{AxisOptions, FieldOptions, MappingOptions, TargetGroup};

pub const MAX_TARGET_GROUPS: usize = 3;
pub const MAX_TARGETS_PER_KIND: usize = 5;
pub const MAX_DIMENSIONS: usize = 5;
pub const MAX_THRESHOLD_STEPS: usize = 20;
pub const MAX_MAPPINGS_PER_KIND: usize = 10;
pub const LOG_BASES: [u32; 2] = [2, 10];

/// Collects every violation of a request before failing
#[derive(Debug, Default)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, ok: bool, message: impl FnOnce() -> String) {
        if !ok {
            self.messages.push(message());
        }
    }

    /// Single-instance blocks are lists of zero or one element
    pub fn at_most_one<T>(&mut self, block: &str, items: &[T]) {
        self.at_most(block, items, 1);
    }

    pub fn at_most<T>(&mut self, block: &str, items: &[T], max: usize) {
        self.check(items.len() <= max, || {
            format!(
                "block '{}' allows at most {} item(s), got {}",
                block,
                max,
                items.len()
            )
        });
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_result(self) -> Result<(), PanelError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(PanelError::Validation(self.messages.join("; ")))
        }
    }
}

pub fn check_targets(violations: &mut Violations, groups: &[TargetGroup]) {
    violations.at_most("targets", groups, MAX_TARGET_GROUPS);
    for group in groups {
        violations.at_most("targets.prometheus", &group.prometheus, MAX_TARGETS_PER_KIND);
        violations.at_most("targets.cloudwatch", &group.cloudwatch, MAX_TARGETS_PER_KIND);
        for target in &group.cloudwatch {
            violations.at_most("targets.cloudwatch.dimension", &target.dimension, MAX_DIMENSIONS);
        }
    }
}

pub fn check_field(violations: &mut Violations, blocks: &[FieldOptions]) {
    violations.at_most_one("field", blocks);
    for field in blocks {
        violations.at_most_one("field.color", &field.color);
        violations.at_most_one("field.thresholds", &field.thresholds);
        violations.at_most_one("field.mappings", &field.mappings);
        for thresholds in &field.thresholds {
            violations.at_most(
                "field.thresholds.step",
                &thresholds.step,
                MAX_THRESHOLD_STEPS,
            );
        }
        for mappings in &field.mappings {
            check_mappings(violations, mappings);
        }
    }
}

fn check_mappings(violations: &mut Violations, mappings: &MappingOptions) {
    violations.at_most("field.mappings.value", &mappings.value, MAX_MAPPINGS_PER_KIND);
    violations.at_most("field.mappings.range", &mappings.range, MAX_MAPPINGS_PER_KIND);
    violations.at_most("field.mappings.regex", &mappings.regex, MAX_MAPPINGS_PER_KIND);
    violations.at_most(
        "field.mappings.special",
        &mappings.special,
        MAX_MAPPINGS_PER_KIND,
    );
}

pub fn check_axis(violations: &mut Violations, blocks: &[AxisOptions]) {
    violations.at_most_one("axis", blocks);
    for axis in blocks {
        violations.at_most_one("axis.scale", &axis.scale);
        for scale in &axis.scale {
            if let Some(log) = scale.log {
                violations.check(LOG_BASES.contains(&log), || {
                    format!("axis.scale.log must be one of 2, 10; got {}", log)
                });
            }
        }
    }
}
