//! Unit tests for mapping composition with `extend` and `defaults`.

#![cfg(feature = "object")]

use std::collections::{BTreeMap, HashMap};

use collectkit::object::{Mapping, defaults, extend};
use rstest::rstest;

// =============================================================================
// extend
// =============================================================================

#[rstest]
fn test_extend_later_sources_win() {
    let mut target = BTreeMap::from([("a", 1)]);
    let first = BTreeMap::from([("b", 2)]);
    let second = BTreeMap::from([("a", 3)]);

    extend(&mut target, [&first, &second]);

    assert_eq!(target, BTreeMap::from([("a", 3), ("b", 2)]));
}

#[rstest]
fn test_extend_leaves_sources_untouched() {
    let mut target = HashMap::from([("name", "moe".to_string())]);
    let source = HashMap::from([("age", "50".to_string())]);

    extend(&mut target, [&source]);

    assert_eq!(source, HashMap::from([("age", "50".to_string())]));
    assert_eq!(target.len(), 2);
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![BTreeMap::from([(1, 'x')])], 1)]
#[case(vec![BTreeMap::from([(1, 'x')]), BTreeMap::from([(1, 'y'), (2, 'z')])], 2)]
fn test_extend_into_empty_target(#[case] sources: Vec<BTreeMap<i32, char>>, #[case] expected_len: usize) {
    let mut target = BTreeMap::new();
    extend(&mut target, &sources);
    assert_eq!(target.len(), expected_len);
}

// =============================================================================
// defaults
// =============================================================================

#[rstest]
fn test_defaults_fills_only_missing_keys() {
    let mut target = BTreeMap::from([("a", 1)]);
    let source = BTreeMap::from([("a", 9), ("b", 2)]);

    defaults(&mut target, [&source]);

    assert_eq!(target, BTreeMap::from([("a", 1), ("b", 2)]));
}

#[rstest]
fn test_defaults_with_several_sources() {
    let mut options = HashMap::from([("flavor", "chocolate")]);
    let first = HashMap::from([("flavor", "vanilla"), ("sprinkles", "lots")]);
    let second = HashMap::from([("sprinkles", "none"), ("cone", "waffle")]);

    defaults(&mut options, [&first, &second]);

    assert_eq!(
        options,
        HashMap::from([("flavor", "chocolate"), ("sprinkles", "lots"), ("cone", "waffle")])
    );
}

#[rstest]
fn test_defaults_then_extend_chain() {
    let mut settings = BTreeMap::from([("theme", "dark")]);
    let fallback = BTreeMap::from([("theme", "light"), ("font", "mono")]);
    let overrides = BTreeMap::from([("font", "serif")]);

    extend(defaults(&mut settings, [&fallback]), [&overrides]);

    assert_eq!(
        settings,
        BTreeMap::from([("theme", "dark"), ("font", "serif")])
    );
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn test_mapping_entries_cover_every_pair() {
    let mapping = HashMap::from([(1, "one"), (2, "two")]);
    let mut entries: Vec<(i32, &str)> = mapping
        .entries()
        .map(|(key, value)| (*key, *value))
        .collect();
    entries.sort_unstable();
    assert_eq!(entries, vec![(1, "one"), (2, "two")]);
    assert!(Mapping::contains_key(&mapping, &2));
    assert!(!Mapping::contains_key(&mapping, &3));
}
