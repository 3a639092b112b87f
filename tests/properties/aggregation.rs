//! Property tests for unit aggregation.

use proptest::prelude::*;

use crunch::models::ResolvedSource;
use crunch::units::aggregate;

fn source_names() -> impl Strategy<Value = Vec<String>> {
    let name = proptest::string::string_regex("[a-z0-9_-]{1,12}\\.js").unwrap();
    proptest::collection::vec(name, 0..=16)
}

fn sources_from(names: &[String]) -> Vec<ResolvedSource> {
    names
        .iter()
        .map(|name| ResolvedSource::new(format!("/srv/js/{name}"), name))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Non-merge aggregation yields exactly one unit per source.
    #[test]
    fn property_non_merge_unit_count(names in source_names()) {
        let units = aggregate(sources_from(&names), false);

        prop_assert_eq!(units.len(), names.len());
        for unit in &units {
            prop_assert_eq!(unit.sources.len(), 1);
        }
    }

    /// PROPERTY: Merge aggregation yields at most one unit, and only an
    /// empty input yields zero.
    #[test]
    fn property_merge_unit_count(names in source_names()) {
        let units = aggregate(sources_from(&names), true);

        if names.is_empty() {
            prop_assert!(units.is_empty());
        } else {
            prop_assert_eq!(units.len(), 1);
            prop_assert_eq!(units[0].sources.len(), names.len());
        }
    }

    /// PROPERTY: Aggregation never reorders, drops, or duplicates sources.
    /// Flattening the units gives back the input sequence exactly.
    #[test]
    fn property_flatten_round_trips(names in source_names(), merge in any::<bool>()) {
        let units = aggregate(sources_from(&names), merge);

        let flattened: Vec<String> = units
            .iter()
            .flat_map(|unit| unit.sources.iter())
            .map(|source| source.relative.to_string_lossy().into_owned())
            .collect();
        prop_assert_eq!(flattened, names);
    }
}
