use alloc::vec::Vec;

use rstest::rstest;

use crate::{
    ClosedRange,
    ClosedRangeIndex::{self, InRange, PastEnd},
    InvertedRangeError, Stride,
};

#[test]
fn basic_facts_about_zero_through_five() {
    let range = ClosedRange::new(0, 5);

    assert_eq!(range.count(), 6);
    assert!(range.contains(0) && range.contains(5));
    assert!(!range.contains(6));
    assert_eq!(range.iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
    assert_eq!(range.distance(range.start_index(), range.end_index()), 6);
}

#[test]
fn zero_width_range_contains_one_element() {
    let range = ClosedRange::new(7, 7);
    assert_eq!(range.count(), 1);
    assert!(range.contains(7));
    assert_eq!(range.iter().collect::<Vec<_>>(), [7]);
}

#[test]
fn inverted_bounds_are_rejected() {
    assert_eq!(ClosedRange::try_new(10, 1), Err(InvertedRangeError));
    assert_eq!(ClosedRange::try_new(1, 10).map(|r| r.count()), Ok(10));
}

#[test]
#[should_panic(expected = "lower bound <= upper bound")]
fn inverted_bounds_panic_in_new() {
    let _ = ClosedRange::new(10i32, 1);
}

#[rstest]
#[case(ClosedRange::new(0, 20), ClosedRange::new(10, 1000), ClosedRange::new(10, 20))]
#[case(ClosedRange::new(0, 5), ClosedRange::new(10, 1000), ClosedRange::new(10, 10))]
#[case(ClosedRange::new(50, 60), ClosedRange::new(10, 40), ClosedRange::new(40, 40))]
#[case(ClosedRange::new(10, 40), ClosedRange::new(0, 100), ClosedRange::new(10, 40))]
fn clamping(
    #[case] range: ClosedRange<i32>,
    #[case] limits: ClosedRange<i32>,
    #[case] expected: ClosedRange<i32>,
) {
    assert_eq!(range.clamped(&limits), expected);
}

#[test]
fn index_ordering_puts_past_end_last() {
    assert!(InRange(i32::MAX) < ClosedRangeIndex::<i32>::PastEnd);
    assert!(InRange(1) < InRange(2));
    assert_eq!(ClosedRangeIndex::<i32>::PastEnd, PastEnd);
}

#[test]
fn stepping_walks_through_the_sentinel() {
    let range = ClosedRange::new(3, 5);

    let mut i = range.start_index();
    let mut seen = Vec::new();
    while i != range.end_index() {
        seen.push(range.element(i));
        i = range.index_after(i);
    }
    assert_eq!(seen, [3, 4, 5]);
    assert_eq!(i, PastEnd);

    // And back again.
    assert_eq!(range.index_before(i), InRange(5));
    assert_eq!(range.index_before(InRange(5)), InRange(4));
}

#[rstest]
#[case(InRange(0), 3, InRange(3))]
#[case(InRange(0), 6, PastEnd)] // exactly one past the upper bound
#[case(InRange(5), 1, PastEnd)]
#[case(InRange(4), -4, InRange(0))]
#[case(PastEnd, 0, PastEnd)]
#[case(PastEnd, -1, InRange(5))]
#[case(PastEnd, -6, InRange(0))]
fn offsetting_indices(
    #[case] from: ClosedRangeIndex<i32>,
    #[case] by: isize,
    #[case] expected: ClosedRangeIndex<i32>,
) {
    let range = ClosedRange::new(0, 5);
    assert_eq!(range.index_offset_by(from, by), expected);
}

#[rstest]
#[case(InRange(1), InRange(4), 3)]
#[case(InRange(4), InRange(1), -3)]
#[case(InRange(3), PastEnd, 3)]
#[case(PastEnd, InRange(3), -3)]
#[case(PastEnd, PastEnd, 0)]
fn distances(
    #[case] from: ClosedRangeIndex<i32>,
    #[case] to: ClosedRangeIndex<i32>,
    #[case] expected: isize,
) {
    let range = ClosedRange::new(0, 5);
    assert_eq!(range.distance(from, to), expected);
}

#[test]
#[should_panic(expected = "cannot advance the past-end index")]
fn advancing_the_sentinel_panics() {
    let range = ClosedRange::new(0, 5);
    let _ = range.index_after(range.end_index());
}

#[test]
#[should_panic(expected = "cannot step before the start index")]
fn stepping_before_the_lower_bound_panics() {
    let range = ClosedRange::new(0, 5);
    let _ = range.index_before(range.start_index());
}

#[test]
#[should_panic(expected = "offset past the end of the range")]
fn overshooting_past_the_sentinel_panics() {
    let range = ClosedRange::new(0, 5);
    let _ = range.index_offset_by(InRange(0), 7);
}

#[test]
#[should_panic(expected = "dereferenced the past-end index")]
fn dereferencing_the_sentinel_panics() {
    let range = ClosedRange::new(0, 5);
    let _ = range.element(range.end_index());
}

#[test]
fn negative_bounds_work() {
    let range = ClosedRange::new(-3i64, 2);
    assert_eq!(range.count(), 6);
    assert!(range.contains(-3) && range.contains(0));
    assert_eq!(range.iter().collect::<Vec<_>>(), [-3, -2, -1, 0, 1, 2]);
}

#[test]
fn stride_over_unsigned_types() {
    assert_eq!(3u8.successor(), 4);
    assert_eq!(3u8.predecessor(), 2);
    assert_eq!(3usize.advanced_by(-2), 1);
    assert_eq!(10u64.distance_to(4), -6);
}

#[test]
#[should_panic(expected = "stride advance out of range")]
fn stride_underflow_panics() {
    let _ = 0u32.advanced_by(-1);
}
