//! # Pedigree Slots
//!
//! ## Role
//! Bounded index into the 16-entry ancestor array, and the fixed tables that
//! describe the tree laid out in that array.
//!
//! ## Layout
//! The array is not breadth-first. Slot 0 is the subject (or a sentinel),
//! and each recorded sire line is stored contiguously below its head:
//!
//! ```text
//! slot  relation (relative to the subject)
//!  1    sire
//!  2    sire's sire            6  sire's dam's sire      8  sire's 2nd dam's sire
//!  3    sire's sire's sire     5  sire's sire's dam's sire
//!  4    sire's sire's sire's sire
//!  7    sire's dam's sire's sire
//!  9    dam's sire
//! 10    dam's sire's sire     12  dam's sire's dam's sire
//! 11    dam's sire's sire's sire
//! 13    2nd dam's sire
//! 14    2nd dam's sire's sire
//! 15    3rd dam's sire
//! ```

use crate::error::{BloodlineError, Result};

/// Number of slots in an ancestor array
pub const N_SLOTS: usize = 16;

/// Validated slot index in `[0, 15]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Slot(u8);

impl Slot {
    /// The subject itself (stallion side) or the sentinel (broodmare side)
    pub const SUBJECT: Slot = Slot(0);
    pub const SIRE: Slot = Slot(1);
    pub const DAMS_SIRE: Slot = Slot(9);
    pub const SECOND_DAMS_SIRE: Slot = Slot(13);
    pub const THIRD_DAMS_SIRE: Slot = Slot(15);

    /// Create a slot, failing with `OutOfRange` outside `[0, 15]`
    pub fn new(value: u32) -> Result<Self> {
        Self::from_index(value as usize)
    }

    fn from_index(value: usize) -> Result<Self> {
        if value >= N_SLOTS {
            return Err(BloodlineError::OutOfRange { value });
        }
        Ok(Self(value as u8))
    }

    /// Only for literals in this module's tables
    const fn literal(value: u8) -> Self {
        assert!((value as usize) < N_SLOTS);
        Self(value)
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All sixteen slots in array order
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..N_SLOTS as u8).map(Slot)
    }

    /// Slots 1..=15, the real ancestors
    pub fn ancestors() -> impl Iterator<Item = Slot> {
        (1..N_SLOTS as u8).map(Slot)
    }

    /// Generation depth of this slot, see [`generation_of`]
    pub fn generation(self) -> u8 {
        generation_of(self)
    }

    /// Sire-line slots recorded below this one, in matching order
    pub fn lineage(self) -> &'static [Slot] {
        &LINEAGE[self.as_usize()]
    }
}

impl TryFrom<u32> for Slot {
    type Error = BloodlineError;

    fn try_from(value: u32) -> Result<Self> {
        Slot::new(value)
    }
}

impl TryFrom<usize> for Slot {
    type Error = BloodlineError;

    fn try_from(value: usize) -> Result<Self> {
        Slot::from_index(value)
    }
}

impl From<Slot> for usize {
    fn from(slot: Slot) -> usize {
        slot.as_usize()
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generation depth per slot. This table is ground truth and is not derived
/// from the layout diagram above.
const GENERATION: [u8; N_SLOTS] = [0, 1, 2, 3, 4, 4, 4, 4, 4, 3, 4, 4, 4, 4, 5, 5];

/// Generation depth of `slot`
pub fn generation_of(slot: Slot) -> u8 {
    GENERATION[slot.as_usize()]
}

const fn s(v: u8) -> Slot {
    Slot::literal(v)
}

/// For a slot whose ancestor matched on both sides, the slots holding that
/// ancestor's own recorded sire line. Two lineages are zipped position by
/// position, so entry order is significant: sire first, then the sire's line,
/// then the dam's sire.
const LINEAGE: [&[Slot]; N_SLOTS] = [
    &[],
    &[s(2), s(3), s(6), s(4), s(5), s(7), s(8)],
    &[s(3), s(4), s(5)],
    &[s(4)],
    &[],
    &[],
    &[s(7)],
    &[],
    &[],
    &[s(10), s(11), s(12)],
    &[s(11)],
    &[],
    &[],
    &[s(14)],
    &[],
    &[],
];

/// Slots checked pairwise for elaborated crosses
pub const ELABORATED_SLOTS: [Slot; 7] = [s(1), s(2), s(3), s(6), s(9), s(10), s(13)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_bounds() {
        assert_eq!(Slot::new(0).unwrap().value(), 0);
        assert_eq!(Slot::new(15).unwrap().value(), 15);
        assert!(matches!(
            Slot::new(16),
            Err(BloodlineError::OutOfRange { value: 16 })
        ));
        assert!(matches!(
            Slot::try_from(usize::MAX),
            Err(BloodlineError::OutOfRange { value: usize::MAX })
        ));
    }

    #[test]
    fn test_generation_table() {
        let expected = [
            (0, 0),
            (1, 1),
            (2, 2),
            (3, 3),
            (9, 3),
            (4, 4),
            (5, 4),
            (6, 4),
            (7, 4),
            (8, 4),
            (10, 4),
            (11, 4),
            (12, 4),
            (13, 4),
            (14, 5),
            (15, 5),
        ];
        for (slot, generation) in expected {
            assert_eq!(generation_of(Slot::new(slot).unwrap()), generation, "slot {slot}");
        }
    }

    #[test]
    fn test_ordering() {
        assert!(Slot::SIRE < Slot::DAMS_SIRE);
        assert_eq!(Slot::all().count(), 16);
        assert_eq!(Slot::ancestors().next(), Some(Slot::SIRE));
        assert_eq!(Slot::ancestors().count(), 15);
    }

    #[test]
    fn test_lineages_stay_below_their_head() {
        for slot in Slot::all() {
            for &below in slot.lineage() {
                assert!(below > slot, "{below} listed under {slot}");
            }
        }
        assert_eq!(Slot::DAMS_SIRE.lineage().len(), 3);
        assert!(Slot::THIRD_DAMS_SIRE.lineage().is_empty());
    }
}
