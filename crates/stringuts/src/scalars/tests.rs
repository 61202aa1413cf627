use alloc::{rc::Rc, vec, vec::Vec};

use super::UnicodeScalarView;
use crate::{Scalar, StringGuts, Utf16Buffer};

fn view_of(s: &str) -> UnicodeScalarView {
    StringGuts::from_str(s).unicode_scalars()
}

fn foreign_view(units: Vec<u16>) -> UnicodeScalarView {
    StringGuts::from_foreign(Rc::new(Utf16Buffer(units))).unicode_scalars()
}

fn chars_of(view: &UnicodeScalarView) -> Vec<char> {
    view.iter().map(|s| s.to_char().unwrap()).collect()
}

#[test]
fn fast_walk_forward_and_backward() {
    let view = view_of("aé😀z");

    assert_eq!(chars_of(&view), ['a', 'é', '😀', 'z']);

    let reversed: Vec<char> = view.iter().rev().map(|s| s.to_char().unwrap()).collect();
    assert_eq!(reversed, ['z', '😀', 'é', 'a']);
}

#[test]
fn fast_after_then_before_is_identity() {
    let view = view_of("aé😀z");

    let mut i = view.start_index();
    while i != view.end_index() {
        let next = view.index_after(i);
        assert_eq!(view.index_before(next), i);
        i = next;
    }
}

#[test]
fn fast_index_offsets_are_code_units() {
    let view = view_of("aé😀z");

    // 'a' is 1 byte, 'é' 2, '😀' 4, 'z' 1.
    let offsets: Vec<usize> = {
        let mut acc = vec![view.start_index().offset()];
        let mut i = view.start_index();
        while i != view.end_index() {
            i = view.index_after(i);
            acc.push(i.offset());
        }
        acc
    };
    assert_eq!(offsets, [0, 1, 3, 7, 8]);
}

#[test]
fn fast_boundary_detection() {
    let view = view_of("aé😀z");

    for (offset, expected) in [
        (0, true),
        (1, true),
        (2, false), // inside 'é'
        (3, true),
        (4, false), // inside '😀'
        (5, false),
        (6, false),
        (7, true),
        (8, true), // end index
    ] {
        assert_eq!(
            view.index_at_offset(offset).is_some(),
            expected,
            "offset {offset}"
        );
    }
    assert_eq!(view.index_at_offset(9), None);
}

#[test]
fn foreign_walk_pairs_surrogates() {
    // "aé😀z" as UTF-16: '😀' is the pair D83D DE00.
    let view = foreign_view(vec![0x0061, 0x00E9, 0xD83D, 0xDE00, 0x007A]);

    assert_eq!(chars_of(&view), ['a', 'é', '😀', 'z']);
    assert_eq!(view.end_index().offset(), 5);

    let reversed: Vec<char> = view.iter().rev().map(|s| s.to_char().unwrap()).collect();
    assert_eq!(reversed, ['z', '😀', 'é', 'a']);
}

#[test]
fn foreign_after_then_before_is_identity() {
    let view = foreign_view(vec![0x0061, 0xD83D, 0xDE00, 0xD800, 0x007A]);

    let mut i = view.start_index();
    while i != view.end_index() {
        let next = view.index_after(i);
        assert_eq!(view.index_before(next), i);
        i = next;
    }
}

#[test]
fn foreign_lone_surrogates_decode_as_single_scalars() {
    // Leading surrogate with no trailing partner, then a lone trailing one.
    let view = foreign_view(vec![0xD800, 0x0041, 0xDC00]);

    let scalars: Vec<Scalar> = view.iter().collect();
    assert_eq!(
        scalars,
        [
            Scalar::new(0xD800).unwrap(),
            Scalar::from('A'),
            Scalar::new(0xDC00).unwrap(),
        ]
    );
}

#[test]
fn foreign_boundary_only_rejects_paired_trailing_surrogates() {
    let view = foreign_view(vec![0xD83D, 0xDE00, 0xDC00]);

    // Offset 1 is the trailing half of a valid pair.
    assert_eq!(view.index_at_offset(1), None);
    // Offset 2 is a lone trailing surrogate: a scalar position of its own.
    assert!(view.index_at_offset(2).is_some());
}

#[test]
fn empty_view_has_equal_start_and_end() {
    let view = view_of("");
    assert!(view.is_empty());
    assert_eq!(view.start_index(), view.end_index());
    assert_eq!(view.iter().next(), None);
}

#[test]
fn view_append_and_push_delegate_to_guts() {
    let mut view = view_of("a");
    view.append(&view_of("é"));
    view.push(Scalar::from('😀'));

    assert_eq!(chars_of(&view), ['a', 'é', '😀']);
    assert!(view.as_guts().is_fast_utf8());
}

#[test]
#[should_panic(expected = "cannot advance the end index")]
fn advancing_end_index_panics() {
    let view = view_of("a");
    let _ = view.index_after(view.end_index());
}

#[test]
#[should_panic(expected = "cannot step before the start index")]
fn stepping_before_start_index_panics() {
    let view = view_of("a");
    let _ = view.index_before(view.start_index());
}

#[test]
#[should_panic(expected = "replace_subrange is not supported")]
fn replace_subrange_is_a_loud_gap() {
    let mut view = view_of("abc");
    let range = view.start_index()..view.end_index();
    let replacement = view_of("x");
    view.replace_subrange(range, &replacement);
}
