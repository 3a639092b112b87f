//! Property tests for target mapping.

use proptest::prelude::*;

use crunch::models::{CompilationUnit, ResolvedSource};
use crunch::target::map_target;
use std::path::{Path, PathBuf};

fn relative_name() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_-]{1,10}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| {
        let mut name = segments.join("/");
        name.push_str(".js");
        name
    })
}

fn unit_of(names: &[String]) -> CompilationUnit {
    CompilationUnit {
        sources: names
            .iter()
            .map(|name| ResolvedSource::new(format!("/srv/js/{name}"), name))
            .collect(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A non-directory declared target is used verbatim, in both
    /// merge and non-merge mode.
    #[test]
    fn property_file_target_is_verbatim(
        names in proptest::collection::vec(relative_name(), 1..=6),
        merge in any::<bool>(),
    ) {
        let declared = PathBuf::from("/srv/out/bundle.min.js");

        let target = map_target(&unit_of(&names), &declared, merge).unwrap();

        prop_assert_eq!(target, declared);
    }

    /// PROPERTY: When the declared target is an existing directory, a
    /// single-source unit maps under it using the source's relative name.
    #[test]
    fn property_directory_target_mirrors_relative_name(name in relative_name()) {
        let out = tempfile::TempDir::new().unwrap();

        let target = map_target(&unit_of(std::slice::from_ref(&name)), out.path(), false).unwrap();

        prop_assert_eq!(target, out.path().join(&name));
    }

    /// PROPERTY: Targeting any of the unit's own sources is rejected,
    /// regardless of merge mode.
    #[test]
    fn property_self_compile_is_always_rejected(
        names in proptest::collection::vec(relative_name(), 1..=6),
        pick in any::<prop::sample::Index>(),
        merge in any::<bool>(),
    ) {
        let unit = unit_of(&names);
        let victim = pick.get(&unit.sources).path.clone();

        let result = map_target(&unit, &victim, merge);

        prop_assert!(result.is_err());
    }

    /// PROPERTY: Mapping never panics on arbitrary declared targets.
    #[test]
    fn property_mapping_never_panics(
        declared in "(?s).{0,64}",
        names in proptest::collection::vec(relative_name(), 0..=4),
        merge in any::<bool>(),
    ) {
        let _ = map_target(&unit_of(&names), Path::new(&declared), merge);
    }
}
