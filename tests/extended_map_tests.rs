//! Integration tests for ExtendedMap.
//!
//! Covers construction, the fold/transform combinators, ordering,
//! adjacent-duplicate removal and rendering, driven through the public API.

use std::borrow::Cow;
use std::collections::VecDeque;

use combinars::collections::{ExtendedMap, JoinOptions, Seed};
use combinars::error::{ContainerKind, EmptyReduceError};
use combinars::extended_map;
use rstest::{fixture, rstest};

#[fixture]
fn scores() -> ExtendedMap<&'static str, i32> {
    ExtendedMap::from_entries([("a", 3), ("b", 1), ("c", 1)])
}

fn entries<V: Copy>(map: &ExtendedMap<&'static str, V>) -> Vec<(&'static str, V)> {
    map.iter().map(|(key, value)| (*key, *value)).collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_from_entries_accepts_any_sequence() {
    let from_vec = ExtendedMap::from_entries(vec![("a", 1), ("b", 2)]);
    let from_iterator = ExtendedMap::from_entries(["a", "b"].into_iter().zip(1..));
    assert_eq!(entries(&from_vec), entries(&from_iterator));
}

#[rstest]
fn test_from_indexed_reads_deque_by_position() {
    let source: VecDeque<(&str, i32)> = VecDeque::from(vec![("x", 1), ("y", 2)]);
    let map = ExtendedMap::from_indexed(&source);
    assert_eq!(entries(&map), vec![("x", 1), ("y", 2)]);
}

#[rstest]
fn test_from_indexed_mapped_applies_function() {
    let source = [("x", 1), ("y", 2)];
    let map = ExtendedMap::from_indexed_mapped(&source, |value, key, _| format!("{key}{value}"));
    assert_eq!(map.get("y").map(String::as_str), Some("y2"));
}

#[rstest]
fn test_collect_and_extend() {
    let mut map: ExtendedMap<&str, i32> = [("a", 1)].into_iter().collect();
    map.extend([("b", 2), ("a", 3)]);
    assert_eq!(entries(&map), vec![("a", 3), ("b", 2)]);
}

#[rstest]
fn test_into_inner_round_trip() {
    let map = extended_map! { "k" => 1 };
    let native = map.clone().into_inner();
    assert_eq!(ExtendedMap::from(native), map);
}

// =============================================================================
// Scenario: sort then dedupe
// =============================================================================

#[rstest]
fn test_sort_orders_values_ascending(scores: ExtendedMap<&'static str, i32>) {
    let sorted = scores.sort_by(|left, right| left.cmp(right));
    assert_eq!(sorted.values().copied().collect::<Vec<_>>(), vec![1, 1, 3]);
    assert_eq!(sorted.len(), scores.len());
}

#[rstest]
fn test_dedupe_after_sort_keeps_one_of_each_value(scores: ExtendedMap<&'static str, i32>) {
    let deduped = scores.dedupe_sorted_by(|left, right| left == right, |left, right| left.cmp(right));
    let remaining = entries(&deduped);

    assert_eq!(remaining.len(), 2);
    assert!(remaining[0] == ("b", 1) || remaining[0] == ("c", 1));
    assert_eq!(remaining[1], ("a", 3));
}

#[rstest]
fn test_sort_and_dedupe_leave_source_untouched(scores: ExtendedMap<&'static str, i32>) {
    let _ = scores.sort_by(|left, right| right.cmp(left));
    let _ = scores.dedupe();
    assert_eq!(entries(&scores), vec![("a", 3), ("b", 1), ("c", 1)]);
}

#[rstest]
fn test_dedupe_on_single_entry_is_identity() {
    let single = extended_map! { "only" => 1 };
    let Cow::Borrowed(returned) = single.dedupe() else {
        panic!("expected the receiver");
    };
    assert!(std::ptr::eq(returned, &single));
}

#[rstest]
fn test_sort_descending_with_string_values() {
    let map = extended_map! { 1 => "pear", 2 => "apple", 3 => "fig" };
    let sorted = map.sort_by(|left, right| right.cmp(left));
    assert_eq!(sorted.keys().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
}

// =============================================================================
// Reduce
// =============================================================================

#[rstest]
fn test_reduce_from_builds_a_different_type(scores: ExtendedMap<&'static str, i32>) {
    let labels = scores.reduce_from(Vec::new(), |mut labels, value, key, _| {
        labels.push(format!("{key}{value}"));
        labels
    });
    assert_eq!(labels, vec!["a3", "b1", "c1"]);
}

#[rstest]
fn test_reduce_or_fail_empty_map_error_message() {
    let empty: ExtendedMap<String, i32> = ExtendedMap::new();
    let error = empty
        .reduce_or_fail(|sum, value, _, _| sum + value)
        .expect_err("empty map cannot be reduced without a seed");

    assert_eq!(error, EmptyReduceError::new(ContainerKind::Map));
    assert_eq!(error.to_string(), "Reduce of empty map with no initial value");
}

fn concatenate(
    accumulator: i32,
    value: &i32,
    _: &&'static str,
    _: &ExtendedMap<&'static str, i32>,
) -> i32 {
    accumulator * 10 + value
}

#[rstest]
fn test_reduce_unseeded_matches_reduce_or_fail(scores: ExtendedMap<&'static str, i32>) {
    assert_eq!(
        scores.reduce(concatenate, Seed::Unseeded),
        scores.reduce_or_fail(concatenate)
    );
    assert_eq!(scores.reduce(concatenate, Seed::Unseeded), Ok(311));
}

// =============================================================================
// Map
// =============================================================================

#[rstest]
fn test_map_changes_value_type(scores: ExtendedMap<&'static str, i32>) {
    let flags = scores.map(|value, _, _| *value > 1);
    assert_eq!(entries(&flags), vec![("a", true), ("b", false), ("c", false)]);
}

#[rstest]
fn test_map_function_sees_whole_source(scores: ExtendedMap<&'static str, i32>) {
    let shares = scores.map(|value, _, source| {
        let total = source.reduce_from(0, |sum, value, _, _| sum + value);
        f64::from(*value) / f64::from(total)
    });
    assert_eq!(shares.get("a"), Some(&0.6));
}

// =============================================================================
// Join
// =============================================================================

#[rstest]
fn test_join_with_explicit_options() {
    let map = extended_map! { "x" => 1, "y" => 2 };
    let options = JoinOptions {
        is_key_before_value: true,
        key_value_delimiter: ":".to_owned(),
        row_delimiter: Some(",".to_owned()),
        show_key: true,
        show_value: true,
    };
    assert_eq!(map.join(&options), "x:1,y:2");
}

#[rstest]
#[case(JoinOptions::rows("\n"), "x:1\ny:2")]
#[case(JoinOptions::from(";"), "x:1;y:2")]
#[case(JoinOptions::rows("\n").with_show_key(false), "1\n2")]
fn test_join_row_delimiter_shorthand(#[case] options: JoinOptions, #[case] expected: &str) {
    let map = extended_map! { "x" => 1, "y" => 2 };
    assert_eq!(map.join(&options), expected);
}

#[rstest]
fn test_join_hides_everything_returns_empty(scores: ExtendedMap<&'static str, i32>) {
    let options = JoinOptions::default()
        .with_show_key(false)
        .with_show_value(false);
    assert_eq!(scores.join(&options), "");
}

#[rstest]
fn test_join_rows_matches_join_with_rows_options(scores: ExtendedMap<&'static str, i32>) {
    assert_eq!(scores.join_rows(" "), scores.join(&JoinOptions::rows(" ")));
    assert_eq!(scores.join_rows(" "), "a:3 b:1 c:1");
}
