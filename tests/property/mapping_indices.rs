//! Mapping index assignment

use gdash::grafana::styles::SpecialMatch;
use gdash::grafana::FieldMapping;
use gdash::options::{
    MappingOptions, RangeMappingOptions, RegexMappingOptions, SpecialMappingOptions,
    ValueMappingOptions,
};
use gdash::translate::translate_mappings;
use proptest::prelude::*;

fn block(values: usize, ranges: usize, regexes: usize, specials: usize) -> MappingOptions {
    MappingOptions {
        value: (0..values)
            .map(|i| ValueMappingOptions {
                value: format!("v{}", i),
                display_text: None,
                color: None,
            })
            .collect(),
        range: (0..ranges)
            .map(|i| RangeMappingOptions {
                from: i as f64,
                to: i as f64 + 1.0,
                display_text: None,
                color: None,
            })
            .collect(),
        regex: (0..regexes)
            .map(|i| RegexMappingOptions {
                pattern: format!("^r{}", i),
                display_text: None,
                color: None,
            })
            .collect(),
        special: (0..specials)
            .map(|_| SpecialMappingOptions {
                matcher: SpecialMatch::Empty,
                display_text: None,
                color: None,
            })
            .collect(),
    }
}

proptest! {
    #[test]
    fn prop_indices_are_contiguous_from_zero(
        values in 0usize..10,
        ranges in 0usize..10,
        regexes in 0usize..10,
        specials in 0usize..10,
    ) {
        let mappings = translate_mappings(&block(values, ranges, regexes, specials));

        let indices: Vec<usize> = mappings.iter().flat_map(FieldMapping::indices).collect();
        let total = values + ranges + regexes + specials;
        prop_assert_eq!(indices, (0..total).collect::<Vec<_>>());

        let expected_len = usize::from(values > 0) + ranges + regexes + specials;
        prop_assert_eq!(mappings.len(), expected_len);
    }
}
