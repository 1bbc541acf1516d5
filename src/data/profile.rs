//! # Pedigree Profiles
//!
//! ## Role
//! The two sides of a mating: a stallion profile and a broodmare profile.
//! Each holds a fixed 16-slot ancestor chain (see [`crate::data::slot`] for
//! the layout) and a handful of marker indices used by the pattern checks.
//!
//! Profiles are immutable values; a new mating plan builds new profiles
//! (see [`BroodmareProfile::daughter`]) instead of editing existing ones.

use std::ops::Index;

use crate::data::properties::{Dirt, Distance, Grade, Growth};
use crate::data::roster::AncestorId;
use crate::data::slot::{Slot, N_SLOTS};

/// The 16 ancestor ids of one pedigree, indexed by [`Slot`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AncestorChain([AncestorId; N_SLOTS]);

impl AncestorChain {
    pub fn new(ids: [AncestorId; N_SLOTS]) -> Self {
        Self(ids)
    }

    pub fn from_raw(ids: [u32; N_SLOTS]) -> Self {
        Self(ids.map(AncestorId::new))
    }

    #[inline]
    pub fn get(&self, slot: Slot) -> AncestorId {
        self.0[slot.as_usize()]
    }

    pub fn as_array(&self) -> &[AncestorId; N_SLOTS] {
        &self.0
    }

    /// `(slot, id)` for slots 1..=15, sentinel ids included
    pub fn ancestors(&self) -> impl Iterator<Item = (Slot, AncestorId)> + '_ {
        Slot::ancestors().map(move |slot| (slot, self.get(slot)))
    }
}

impl Index<Slot> for AncestorChain {
    type Output = AncestorId;

    fn index(&self, slot: Slot) -> &AncestorId {
        &self.0[slot.as_usize()]
    }
}

/// Stud-book attributes of a stallion; carried, never analysed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StallionAttributes {
    pub fee: u32,
    pub distance: Distance,
    pub growth: Growth,
    pub dirt: Dirt,
    pub health: Grade,
    pub temper: Grade,
    pub achievement: Grade,
    pub spirit: Grade,
    pub stable: Grade,
}

/// Sire side of a mating. Slot 0 holds the stallion's own roster id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StallionProfile {
    ancestors: AncestorChain,
    /// Even positions are interesting markers, odd positions wonderful markers
    markers: [u32; 8],
    attributes: StallionAttributes,
}

impl StallionProfile {
    pub fn new(ancestors: AncestorChain, markers: [u32; 8]) -> Self {
        Self::with_attributes(ancestors, markers, StallionAttributes::default())
    }

    pub fn with_attributes(
        ancestors: AncestorChain,
        markers: [u32; 8],
        attributes: StallionAttributes,
    ) -> Self {
        Self {
            ancestors,
            markers,
            attributes,
        }
    }

    /// Roster id of the stallion itself
    pub fn id(&self) -> AncestorId {
        self.ancestors.get(Slot::SUBJECT)
    }

    #[inline]
    pub fn ancestor(&self, slot: Slot) -> AncestorId {
        self.ancestors.get(slot)
    }

    pub fn ancestors(&self) -> &AncestorChain {
        &self.ancestors
    }

    pub fn markers(&self) -> &[u32; 8] {
        &self.markers
    }

    /// Markers at positions 0, 2, 4, 6
    pub fn interesting_markers(&self) -> [u32; 4] {
        [self.markers[0], self.markers[2], self.markers[4], self.markers[6]]
    }

    /// Markers at positions 1, 3, 5, 7
    pub fn wonderful_markers(&self) -> [u32; 4] {
        [self.markers[1], self.markers[3], self.markers[5], self.markers[7]]
    }

    pub fn attributes(&self) -> &StallionAttributes {
        &self.attributes
    }
}

/// Stud-book attributes of a broodmare; carried, never analysed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BroodmareAttributes {
    pub fee: u32,
    pub speed: u32,
    pub stamina: u32,
    pub power: u32,
    pub dirt: Dirt,
}

/// Dam side of a mating. Slot 0 is the sentinel and is never read as an
/// ancestor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BroodmareProfile {
    ancestors: AncestorChain,
    markers: [u32; 4],
    attributes: BroodmareAttributes,
}

/// Stallion slots copied into a daughter's slots 1..=8
const DAUGHTER_SIRE_SIDE: [u8; 8] = [0, 1, 2, 3, 6, 9, 10, 13];
/// Dam slots copied into a daughter's slots 9..=15
const DAUGHTER_DAM_SIDE: [u8; 7] = [1, 2, 3, 6, 9, 10, 13];

impl BroodmareProfile {
    pub fn new(ancestors: AncestorChain, markers: [u32; 4]) -> Self {
        Self::with_attributes(ancestors, markers, BroodmareAttributes::default())
    }

    pub fn with_attributes(
        ancestors: AncestorChain,
        markers: [u32; 4],
        attributes: BroodmareAttributes,
    ) -> Self {
        Self {
            ancestors,
            markers,
            attributes,
        }
    }

    /// Profile of a filly by `sire` out of `dam`, used to plan the next
    /// generation. The sire's pedigree shifts down one generation into slots
    /// 1..=8, the dam's into 9..=15; anything that would fall off the
    /// four-generation window is dropped. Attributes are unknown.
    pub fn daughter(sire: &StallionProfile, dam: &BroodmareProfile) -> Self {
        let mut ids = [AncestorId::SENTINEL; N_SLOTS];
        for (offset, &from) in DAUGHTER_SIRE_SIDE.iter().enumerate() {
            ids[1 + offset] = sire.ancestors.as_array()[from as usize];
        }
        for (offset, &from) in DAUGHTER_DAM_SIDE.iter().enumerate() {
            ids[9 + offset] = dam.ancestors.as_array()[from as usize];
        }

        let sire_markers = sire.interesting_markers();
        let markers = [sire_markers[0], sire_markers[2], dam.markers[0], dam.markers[2]];

        Self::new(AncestorChain::new(ids), markers)
    }

    #[inline]
    pub fn ancestor(&self, slot: Slot) -> AncestorId {
        self.ancestors.get(slot)
    }

    pub fn ancestors(&self) -> &AncestorChain {
        &self.ancestors
    }

    /// All four markers are interesting markers
    pub fn markers(&self) -> &[u32; 4] {
        &self.markers
    }

    pub fn attributes(&self) -> &BroodmareAttributes {
        &self.attributes
    }
}
