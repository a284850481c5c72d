//! Mapping translation.

use crate::grafana::{FieldMapping, MappingResult, RangeMapping, RegexMapping, SpecialMapping};
use crate::options::MappingOptions;
use std::collections::BTreeMap;

/// Translate one mapping block
///
/// Value mappings fold into a single `value` entry (emitted only when at
/// least one exists). Range, regex and special mappings each become their
/// own entry. One counter, starting at zero, numbers the results across all
/// four kinds in that order.
pub fn translate_mappings(block: &MappingOptions) -> Vec<FieldMapping> {
    let mut mappings = Vec::new();
    let mut index = 0usize;

    let mut values = BTreeMap::new();
    for value in &block.value {
        values.insert(
            value.value.clone(),
            result(&value.color, &value.display_text, index),
        );
        index += 1;
    }
    if !values.is_empty() {
        mappings.push(FieldMapping::Value(values));
    }

    for range in &block.range {
        // TODO: `to` mirrors `from`, as the dashboards generated so far do;
        // confirm with the dashboard maintainers before switching to `range.to`.
        mappings.push(FieldMapping::Range(RangeMapping {
            from: range.from,
            result: result(&range.color, &range.display_text, index),
            to: range.from,
        }));
        index += 1;
    }

    for regex in &block.regex {
        mappings.push(FieldMapping::Regex(RegexMapping {
            pattern: regex.pattern.clone(),
            result: result(&regex.color, &regex.display_text, index),
        }));
        index += 1;
    }

    for special in &block.special {
        mappings.push(FieldMapping::Special(SpecialMapping {
            matcher: special.matcher,
            result: result(&special.color, &special.display_text, index),
        }));
        index += 1;
    }

    mappings
}

fn result(color: &Option<String>, text: &Option<String>, index: usize) -> MappingResult {
    MappingResult {
        color: color.clone().unwrap_or_default(),
        text: text.clone().unwrap_or_default(),
        index,
    }
}
