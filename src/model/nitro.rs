//! # Nitro Aggregation
//!
//! Trait counts over the distinct ancestors of a mating and the three derived
//! "nitro" scores:
//!
//! ```text
//! speed   = 2 * sprint + speed
//! stamina = stamina + spirit - sprint
//! power   = power
//! ```
//!
//! An ancestor appearing several times, or on both sides, counts once.

use std::collections::BTreeSet;

use crate::data::profile::AncestorChain;
use crate::data::roster::{AncestorId, RosterLookup};
use crate::error::Result;

/// Raw trait counts and derived scores
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nitro {
    sprint: u32,
    speed: u32,
    stamina: u32,
    spirit: u32,
    power: u32,
}

impl Nitro {
    pub fn speed_score(&self) -> i32 {
        2 * self.sprint as i32 + self.speed as i32
    }

    /// May be negative
    pub fn stamina_score(&self) -> i32 {
        self.stamina as i32 + self.spirit as i32 - self.sprint as i32
    }

    pub fn power_score(&self) -> i32 {
        self.power as i32
    }

    pub fn sprint_count(&self) -> u32 {
        self.sprint
    }

    pub fn speed_count(&self) -> u32 {
        self.speed
    }

    pub fn stamina_count(&self) -> u32 {
        self.stamina
    }

    pub fn spirit_count(&self) -> u32 {
        self.spirit
    }

    pub fn power_count(&self) -> u32 {
        self.power
    }
}

/// Distinct non-sentinel ids over slots 1..=15 of both chains
pub fn distinct_ancestors(
    stallion: &AncestorChain,
    broodmare: &AncestorChain,
) -> BTreeSet<AncestorId> {
    stallion
        .ancestors()
        .chain(broodmare.ancestors())
        .map(|(_, id)| id)
        .filter(|id| !id.is_sentinel())
        .collect()
}

/// Count traits over the distinct ancestors of both chains
pub fn aggregate_nitro<R: RosterLookup + ?Sized>(
    stallion: &AncestorChain,
    broodmare: &AncestorChain,
    roster: &R,
) -> Result<Nitro> {
    let mut nitro = Nitro::default();
    for id in distinct_ancestors(stallion, broodmare) {
        let effects = roster.effects(id)?;
        nitro.sprint += u32::from(effects.is_sprint());
        nitro.speed += u32::from(effects.is_speed());
        nitro.stamina += u32::from(effects.is_stamina());
        nitro.spirit += u32::from(effects.is_spirit());
        nitro.power += u32::from(effects.is_power());
    }
    Ok(nitro)
}
