//! Property tests for bit sequences and bounded bit packing.

use proptest::prelude::*;
use wordhuff_core::{BitSequence, BoundedBitPacker};

/// Pack through a bounded packer, draining on every overflow.
fn pack_bounded(capacity: usize, codes: &[BitSequence]) -> Vec<u8> {
    let mut packer = BoundedBitPacker::new(capacity).expect("capacity");
    let mut out = Vec::new();
    for code in codes {
        packer.append(code).expect("append");
        while packer.has_overflow() {
            out.extend(packer.drain_full().expect("drain_full"));
        }
    }
    out.extend(packer.drain_partial().expect("drain_partial"));
    out
}

/// Reference packing into a growable vector.
fn pack_reference(codes: &[BitSequence]) -> Vec<u8> {
    let all: BitSequence = codes.iter().flat_map(|c| c.iter().collect::<Vec<_>>()).collect();
    let mut out = vec![0u8; all.len().div_ceil(8)];
    for (i, bit) in all.iter().enumerate() {
        if bit {
            out[i / 8] |= 0x80 >> (i % 8);
        }
    }
    out
}

fn codes_strategy() -> impl Strategy<Value = Vec<BitSequence>> {
    prop::collection::vec(
        prop::collection::vec(any::<bool>(), 0..40)
            .prop_map(|bits| bits.into_iter().collect::<BitSequence>()),
        0..200,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Bounded packing is byte-identical to unbounded packing.
    #[test]
    fn bounded_matches_reference(codes in codes_strategy(), capacity in 1usize..16) {
        prop_assert_eq!(pack_bounded(capacity, &codes), pack_reference(&codes));
    }

    /// Appended bits read back in order.
    #[test]
    fn bitsequence_preserves_order(bits in prop::collection::vec(any::<bool>(), 0..300)) {
        let seq: BitSequence = bits.iter().copied().collect();
        prop_assert_eq!(seq.len(), bits.len());
        for (i, &bit) in bits.iter().enumerate() {
            prop_assert_eq!(seq.get(i).unwrap(), bit);
        }
        prop_assert!(seq.get(bits.len()).is_err());
    }
}

#[test]
fn test_many_small_appends_tiny_capacity() {
    let codes: Vec<BitSequence> = (0..10_000)
        .map(|i| [i % 2 == 0, i % 3 == 0, i % 5 == 0].into_iter().collect())
        .collect();
    assert_eq!(pack_bounded(1, &codes), pack_reference(&codes));
    assert_eq!(pack_bounded(5, &codes), pack_reference(&codes));
}
