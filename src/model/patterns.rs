//! # Pattern Checks
//!
//! Three independent boolean classifications of a mating:
//!
//! - **interesting**: the stallion's interesting markers and the broodmare's
//!   markers together hold at least seven distinct values.
//! - **wonderful**: the stallion's wonderful markers, as a set, equal the
//!   broodmare's markers.
//! - **elaborated**: some ancestor pair drawn from [`ELABORATED_SLOTS`] on each
//!   side is a known elaborated pair.

use std::collections::BTreeSet;

use crate::data::elaborated::ElaboratedPairSet;
use crate::data::profile::{BroodmareProfile, StallionProfile};
use crate::data::slot::ELABORATED_SLOTS;

/// Distinct marker count needed for an interesting mating
pub const INTERESTING_MIN_MARKERS: usize = 7;

pub fn is_interesting(stallion: &StallionProfile, broodmare: &BroodmareProfile) -> bool {
    let markers: BTreeSet<u32> = stallion
        .interesting_markers()
        .into_iter()
        .chain(broodmare.markers().iter().copied())
        .collect();
    markers.len() >= INTERESTING_MIN_MARKERS
}

pub fn is_wonderful(stallion: &StallionProfile, broodmare: &BroodmareProfile) -> bool {
    let sire_side: BTreeSet<u32> = stallion.wonderful_markers().into_iter().collect();
    let dam_side: BTreeSet<u32> = broodmare.markers().iter().copied().collect();
    sire_side == dam_side
}

pub fn is_elaborated(
    stallion: &StallionProfile,
    broodmare: &BroodmareProfile,
    pairs: &ElaboratedPairSet,
) -> bool {
    ELABORATED_SLOTS.iter().any(|&s1| {
        let sire_side = stallion.ancestor(s1);
        ELABORATED_SLOTS
            .iter()
            .any(|&s2| pairs.has_pair(sire_side, broodmare.ancestor(s2)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::profile::AncestorChain;
    use crate::data::roster::AncestorId;

    fn stallion(markers: [u32; 8]) -> StallionProfile {
        let ids: [u32; 16] = std::array::from_fn(|i| 100 + i as u32);
        StallionProfile::new(AncestorChain::from_raw(ids), markers)
    }

    fn broodmare(markers: [u32; 4]) -> BroodmareProfile {
        let ids: [u32; 16] = std::array::from_fn(|i| if i == 0 { 0 } else { 200 + i as u32 });
        BroodmareProfile::new(AncestorChain::from_raw(ids), markers)
    }

    #[test]
    fn test_interesting_boundary() {
        // interesting markers sit at even positions
        let s = stallion([1, 0, 2, 0, 3, 0, 4, 0]);
        assert!(!is_interesting(&s, &broodmare([4, 5, 6, 6])));
        assert!(is_interesting(&s, &broodmare([5, 6, 7, 7])));
        assert!(is_interesting(&s, &broodmare([5, 6, 7, 8])));
    }

    #[test]
    fn test_interesting_ignores_wonderful_positions() {
        let s = stallion([1, 9, 1, 10, 1, 11, 1, 12]);
        assert!(!is_interesting(&s, &broodmare([2, 3, 4, 5])));
    }

    #[test]
    fn test_wonderful_set_equality() {
        let s = stallion([0, 4, 0, 3, 0, 2, 0, 1]);
        assert!(is_wonderful(&s, &broodmare([1, 2, 3, 4])));
        assert!(!is_wonderful(&s, &broodmare([1, 2, 3, 5])));

        let dup = stallion([0, 1, 0, 1, 0, 2, 0, 2]);
        assert!(is_wonderful(&dup, &broodmare([2, 1, 2, 1])));
        assert!(!is_wonderful(&dup, &broodmare([1, 2, 3, 1])));
    }

    #[test]
    fn test_elaborated_pairs() {
        let s = stallion([0; 8]);
        let b = broodmare([0; 4]);
        let mut pairs = ElaboratedPairSet::new();
        assert!(!is_elaborated(&s, &b, &pairs));

        // slot 5 is not an elaborated slot on either side
        pairs.insert(AncestorId::new(105), AncestorId::new(201));
        pairs.insert(AncestorId::new(101), AncestorId::new(205));
        assert!(!is_elaborated(&s, &b, &pairs));

        // reversed orientation does not count
        pairs.insert(AncestorId::new(213), AncestorId::new(110));
        assert!(!is_elaborated(&s, &b, &pairs));

        pairs.insert(AncestorId::new(110), AncestorId::new(213));
        assert!(is_elaborated(&s, &b, &pairs));
    }
}
