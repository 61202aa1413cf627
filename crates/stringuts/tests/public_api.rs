//! End-to-end exercises of the public surface: representation transitions,
//! the scalar view over fast and foreign storage, and closed ranges.

use std::rc::Rc;

use stringuts::{ClosedRange, ForeignSource, SMALL_CAP, Scalar, StringGuts, Utf16Buffer};

/// A caller-defined foreign source: code units computed on demand.
struct Repeated {
    unit: u16,
    count: usize,
}

impl ForeignSource for Repeated {
    fn code_unit_count(&self) -> usize {
        self.count
    }

    fn code_unit(&self, _index: usize) -> u16 {
        self.unit
    }
}

#[test]
fn representation_transitions_under_append() {
    let mut guts = StringGuts::from_str("a");
    assert!(!guts.has_native_storage());

    // Grow past the inline budget one piece at a time.
    while guts.count() <= SMALL_CAP {
        guts.append(&StringGuts::from_str("ab"));
    }
    assert!(guts.has_native_storage());
    assert!(guts.is_fast_utf8());
    assert!(guts.is_known_ascii());

    guts.append(&StringGuts::from_str("é"));
    assert!(!guts.is_known_ascii());
}

#[test]
fn scalar_view_round_trips_mixed_content() {
    let text = "aé😀z";
    let view = StringGuts::from_str(text).unicode_scalars();

    let forward: String = view.iter().map(|s| s.to_char().unwrap()).collect();
    assert_eq!(forward, text);

    let utf16: Vec<u16> = text.encode_utf16().collect();
    let foreign = StringGuts::from_foreign(Rc::new(Utf16Buffer(utf16))).unicode_scalars();
    let transcoded: String = foreign.iter().map(|s| s.to_char().unwrap()).collect();
    assert_eq!(transcoded, text);
}

#[test]
fn user_defined_foreign_sources_plug_in() {
    let mut guts = StringGuts::from_foreign(Rc::new(Repeated {
        unit: 0x2713, // '✓'
        count: 3,
    }));
    assert!(guts.is_foreign());
    assert_eq!(guts.count(), 3);
    assert_eq!(guts.utf8_len(), 9);

    guts.grow(0);
    assert!(guts.has_native_storage());
    guts.with_fast_utf8(|bytes| assert_eq!(bytes, "✓✓✓".as_bytes()));
}

#[test]
fn copy_and_c_string_access() {
    let guts = StringGuts::from_str("hé");

    let mut buf = [0u8; 3];
    assert_eq!(guts.copy_utf8(&mut buf), Some(3));
    assert_eq!(&buf, "hé".as_bytes());

    guts.with_c_string(|bytes| {
        assert_eq!(bytes.last(), Some(&0));
        assert_eq!(&bytes[..bytes.len() - 1], "hé".as_bytes());
    });
}

#[test]
fn scalar_view_append_across_representations() {
    let mut view = StringGuts::from_str("sum: ").unicode_scalars();
    view.push(Scalar::from('Σ'));
    view.append(&StringGuts::from_foreign(Rc::new(Utf16Buffer(vec![0x0021]))).unicode_scalars());

    let rendered: String = view.iter().map(|s| s.to_char().unwrap()).collect();
    assert_eq!(rendered, "sum: Σ!");
}

#[test]
fn closed_ranges_clamp_and_iterate() {
    let range = ClosedRange::new(0u32, 20);
    assert_eq!(range.clamped(&ClosedRange::new(10, 1000)), ClosedRange::new(10, 20));
    assert_eq!(
        ClosedRange::new(0u32, 5).clamped(&ClosedRange::new(10, 1000)),
        ClosedRange::new(10, 10)
    );

    let sum: u32 = ClosedRange::new(1u32, 4).iter().sum();
    assert_eq!(sum, 10);
}
