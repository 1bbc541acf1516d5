//! # Cross Detection
//!
//! ## Role
//! Find ancestors present on both the sire side and the dam side of a mating
//! (inbreeding "crosses"), and the generation depths at which they appear.
//!
//! ## Algorithm
//! Stallion slots `i = 1..=15` are scanned in order against broodmare slots
//! `j = 1..=15`:
//!
//! 1. If the stallion ancestor at `i` is already a recorded cross, its depth
//!    `generation_of(i)` is appended and the dam side is not rescanned.
//! 2. Otherwise every non-excluded `j` holding the same id appends
//!    `generation_of(j)`, and slot `i` itself appends `generation_of(i)` once
//!    if it matched at all.
//! 3. A match at `(i, j)` implies that the ancestor's own sire line matches
//!    too. Those pairs are the same cross seen again, so the lineages below
//!    `i` and `j` are zipped and every zipped pair is excluded for the rest
//!    of the scan.
//!
//! The sentinel id never takes part.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::effects::{Effect, N_EFFECTS};
use crate::data::profile::AncestorChain;
use crate::data::roster::{AncestorId, RosterLookup};
use crate::data::slot::{generation_of, Slot, N_SLOTS};
use crate::error::{BloodlineError, Result};

/// Blood volume at or above which a cross is dangerous
pub const DANGER_BLOOD_VOLUME: f64 = 50.0;

/// Numerator of the per-occurrence weight `50 / depth`
const OCCURRENCE_WEIGHT: f64 = 50.0;

/// Crosses of one mating: ancestor id → recorded generation depths
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cross {
    crosses: BTreeMap<AncestorId, Vec<u8>>,
}

impl Cross {
    fn append(&mut self, id: AncestorId, generation: u8) {
        self.crosses.entry(id).or_default().push(generation);
    }

    pub fn num_crosses(&self) -> usize {
        self.crosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crosses.is_empty()
    }

    pub fn has_cross(&self, id: AncestorId) -> bool {
        self.crosses.contains_key(&id)
    }

    /// Ids of all crossed ancestors
    pub fn cross_indices(&self) -> BTreeSet<AncestorId> {
        self.crosses.keys().copied().collect()
    }

    /// Depths recorded for `id`, in detection order
    pub fn generations(&self, id: AncestorId) -> Result<&[u8]> {
        self.crosses
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(BloodlineError::NotFound { id: id.0 })
    }

    /// `Σ 50 / depth` over the depths recorded for `id`
    pub fn blood_volume(&self, id: AncestorId) -> Result<f64> {
        Ok(self
            .generations(id)?
            .iter()
            .map(|&depth| OCCURRENCE_WEIGHT / f64::from(depth))
            .sum())
    }

    pub fn is_danger(&self, id: AncestorId) -> Result<bool> {
        Ok(self.blood_volume(id)? >= DANGER_BLOOD_VOLUME)
    }

    /// True if any crossed ancestor is dangerous
    pub fn any_danger(&self) -> bool {
        self.crosses
            .keys()
            .any(|&id| self.is_danger(id).unwrap_or(false))
    }

    /// Per-effect count over the distinct crossed ancestors, in
    /// [`Effect::ALL`] order
    pub fn effect_totals<R: RosterLookup + ?Sized>(&self, roster: &R) -> Result<[u32; N_EFFECTS]> {
        let mut totals = [0u32; N_EFFECTS];
        for &id in self.crosses.keys() {
            let effects = roster.effects(id)?;
            for effect in Effect::ALL {
                totals[effect.index()] += u32::from(effects.has(effect));
            }
        }
        Ok(totals)
    }
}

/// Detect the crosses between a stallion chain and a broodmare chain
pub fn detect_crosses(stallion: &AncestorChain, broodmare: &AncestorChain) -> Cross {
    let mut cross = Cross::default();
    let mut excluded = [[false; N_SLOTS]; N_SLOTS];

    for (i, id) in stallion.ancestors() {
        if id.is_sentinel() {
            continue;
        }
        if cross.has_cross(id) {
            cross.append(id, generation_of(i));
            continue;
        }

        let mut matched = false;
        for (j, other) in broodmare.ancestors() {
            if other != id || excluded[i.as_usize()][j.as_usize()] {
                continue;
            }
            matched = true;
            cross.append(id, generation_of(j));
            exclude_lineage(i, j, &mut excluded);
        }

        if matched {
            cross.append(id, generation_of(i));
        }
    }

    cross
}

fn exclude_lineage(i: Slot, j: Slot, excluded: &mut [[bool; N_SLOTS]; N_SLOTS]) {
    for (a, b) in i.lineage().iter().zip(j.lineage()) {
        excluded[a.as_usize()][b.as_usize()] = true;
    }
}
