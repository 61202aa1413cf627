#![no_main]
use std::rc::Rc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stringuts::{Scalar, StringGuts, Utf16Buffer};

/// One piece of a string assembled by the fuzzer: either well-formed text or
/// arbitrary (possibly ill-formed UTF-16) foreign code units.
#[derive(Debug, Arbitrary)]
enum Piece {
    Text(String),
    Foreign(Vec<u16>),
}

#[derive(Debug, Arbitrary)]
struct Plan {
    pieces: Vec<Piece>,
    reserve: u16,
}

fn guts_of(piece: &Piece) -> StringGuts {
    match piece {
        Piece::Text(s) => StringGuts::from_str(s),
        Piece::Foreign(units) => StringGuts::from_foreign(Rc::new(Utf16Buffer(units.clone()))),
    }
}

/// Walks the whole view forward and backward, checking that the two
/// traversals agree and that every visited index is a scalar boundary.
fn check_walk(guts: &StringGuts) {
    let view = guts.clone().unicode_scalars();

    let forward: Vec<Scalar> = view.iter().collect();
    let mut backward: Vec<Scalar> = view.iter().rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);

    let mut i = view.start_index();
    let mut steps = 0usize;
    while i != view.end_index() {
        assert!(view.is_on_scalar_boundary(i));
        let next = view.index_after(i);
        assert_eq!(view.index_before(next), i);
        assert!(next > i);
        i = next;
        steps += 1;
    }
    assert_eq!(steps, forward.len());
}

fuzz_target!(|plan: Plan| {
    let mut combined = StringGuts::new();
    combined.reserve(usize::from(plan.reserve) % 4096);

    for piece in &plan.pieces {
        let guts = guts_of(piece);
        check_walk(&guts);

        let snapshot = combined.clone();
        let before = combined.utf8_len();
        combined.append(&guts);
        assert_eq!(combined.utf8_len(), before + guts.utf8_len());
        assert_eq!(snapshot.utf8_len(), before);
    }

    check_walk(&combined);

    let mut buf = vec![0u8; combined.utf8_len()];
    assert_eq!(combined.copy_utf8(&mut buf), Some(buf.len()));
});
