//! Integration tests for ExtendedSet.

use combinars::collections::{ExtendedSet, Seed};
use combinars::error::{ContainerKind, EmptyReduceError};
use combinars::extended_set;
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_of_and_macro_agree() {
    assert_eq!(ExtendedSet::of([1, 2, 2, 3]), extended_set![1, 2, 2, 3]);
}

#[rstest]
fn test_from_elements_keeps_first_occurrence_order() {
    let set = ExtendedSet::from_elements("mississippi".chars());
    assert_eq!(set.join(""), "misp");
}

#[rstest]
fn test_from_indexed_mapped_collapses_outputs() {
    let words = vec!["apple", "avocado", "banana"];
    let initials = ExtendedSet::from_indexed_mapped(&words, |word, _, _| word.chars().next());
    assert_eq!(initials.to_list(), vec![&Some('a'), &Some('b')]);
}

#[rstest]
fn test_native_api_through_deref() {
    let mut set = extended_set!["a", "b"];
    assert!(set.insert("c"));
    assert!(!set.insert("a"));
    assert!(set.contains("b"));
    assert_eq!(set.get_index(2), Some(&"c"));
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn test_join_with_dash() {
    assert_eq!(ExtendedSet::of([1, 2, 3]).join("-"), "1-2-3");
}

#[rstest]
fn test_join_multi_character_delimiter() {
    assert_eq!(ExtendedSet::of(["a", "b"]).join(" :: "), "a :: b");
}

#[rstest]
fn test_to_list_is_ordered_and_unique() {
    assert_eq!(ExtendedSet::of([1, 2, 2, 3]).to_list(), vec![&1, &2, &3]);
}

#[cfg(feature = "json")]
#[rstest]
fn test_to_json_scenario() {
    use serde_json::json;

    let set = ExtendedSet::of([1, 2, 2, 3]);
    assert_eq!(set.to_json(), vec![json!(1), json!(2), json!(3)]);
}

// =============================================================================
// Map and Reduce
// =============================================================================

#[rstest]
fn test_map_may_shrink() {
    let set = ExtendedSet::of(["one", "two", "three", "four"]);
    let lengths = set.map(|word, _, _| word.len());

    assert_eq!(lengths.to_list(), vec![&3, &5, &4]);
    assert!(lengths.len() < set.len());
}

#[rstest]
fn test_map_index_follows_iteration_order() {
    let set = ExtendedSet::of(['c', 'a', 'b']);
    let positions = set.map(|element, index, _| format!("{index}{element}"));
    assert_eq!(positions.join(","), "0c,1a,2b");
}

#[rstest]
fn test_reduce_from_sum_of_indexes() {
    let set = ExtendedSet::of([10, 20, 30]);
    assert_eq!(set.reduce_from(0, |sum, _, index, _| sum + index), 3);
}

#[rstest]
fn test_reduce_unseeded_on_empty_set() {
    let set: ExtendedSet<String> = extended_set![];
    let result = set.reduce(|joined, value, _, _| joined + value, Seed::Unseeded);

    assert_eq!(result, Err(EmptyReduceError::new(ContainerKind::Set)));
    assert_eq!(
        result.map_err(|error| error.to_string()),
        Err("Reduce of empty set with no initial value".to_owned())
    );
}

#[rstest]
fn test_reduce_or_fail_concatenates_strings() {
    let set = ExtendedSet::from_elements(["a", "b", "c"].map(String::from));
    let joined = set.reduce_or_fail(|joined, value, _, _| joined + "+" + value);
    assert_eq!(joined, Ok("a+b+c".to_owned()));
}
