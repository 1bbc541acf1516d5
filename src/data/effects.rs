//! # Blood Effects
//!
//! The eleven boolean traits a stallion passes down, stored bit-packed in a
//! single `u16` word.

use std::fmt;
use std::str::FromStr;

use bitvec::prelude::*;

use crate::error::{BloodlineError, Result};

/// One inheritable trait. Discriminants are the bit positions and also the
/// column order of every per-effect table in the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Effect {
    Sprint = 0,
    Speed = 1,
    Stamina = 2,
    Spirit = 3,
    Stable = 4,
    Temper = 5,
    Precocious = 6,
    Altrical = 7,
    Tough = 8,
    Dirt = 9,
    Power = 10,
}

/// Number of distinct effects
pub const N_EFFECTS: usize = 11;

impl Effect {
    pub const ALL: [Effect; N_EFFECTS] = [
        Effect::Sprint,
        Effect::Speed,
        Effect::Stamina,
        Effect::Spirit,
        Effect::Stable,
        Effect::Temper,
        Effect::Precocious,
        Effect::Altrical,
        Effect::Tough,
        Effect::Dirt,
        Effect::Power,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Effect::Sprint => "sprint",
            Effect::Speed => "speed",
            Effect::Stamina => "stamina",
            Effect::Spirit => "spirit",
            Effect::Stable => "stable",
            Effect::Temper => "temper",
            Effect::Precocious => "precocious",
            Effect::Altrical => "altrical",
            Effect::Tough => "tough",
            Effect::Dirt => "dirt",
            Effect::Power => "power",
        }
    }

    /// Label used in the roster dataset
    pub fn label(self) -> &'static str {
        match self {
            Effect::Sprint => "短距離",
            Effect::Speed => "速力",
            Effect::Stamina => "長距離",
            Effect::Spirit => "底力",
            Effect::Stable => "堅実",
            Effect::Temper => "気性難",
            Effect::Precocious => "早熟",
            Effect::Altrical => "晩成",
            Effect::Tough => "丈夫",
            Effect::Dirt => "ダート",
            Effect::Power => "パワー",
        }
    }
}

impl FromStr for Effect {
    type Err = BloodlineError;

    fn from_str(s: &str) -> Result<Self> {
        Effect::ALL
            .into_iter()
            .find(|e| e.label() == s)
            .ok_or_else(|| BloodlineError::unknown_key("effect", s))
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of effects carried by one horse
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TraitVector {
    bits: BitArray<[u16; 1], Lsb0>,
}

impl TraitVector {
    /// No effects; the sentinel entry carries this
    pub fn empty() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    pub fn with(mut self, effect: Effect) -> Self {
        self.bits.set(effect.index(), true);
        self
    }

    #[inline]
    pub fn has(&self, effect: Effect) -> bool {
        self.bits[effect.index()]
    }

    /// Effects present, in column order
    pub fn iter(&self) -> impl Iterator<Item = Effect> + '_ {
        Effect::ALL.into_iter().filter(|&e| self.has(e))
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    pub fn is_sprint(&self) -> bool {
        self.has(Effect::Sprint)
    }

    pub fn is_speed(&self) -> bool {
        self.has(Effect::Speed)
    }

    pub fn is_stamina(&self) -> bool {
        self.has(Effect::Stamina)
    }

    pub fn is_spirit(&self) -> bool {
        self.has(Effect::Spirit)
    }

    pub fn is_power(&self) -> bool {
        self.has(Effect::Power)
    }
}

impl FromIterator<Effect> for TraitVector {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        iter.into_iter().fold(TraitVector::empty(), TraitVector::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let v: TraitVector = [Effect::Sprint, Effect::Power].into_iter().collect();
        assert!(v.is_sprint());
        assert!(v.is_power());
        assert!(!v.is_speed());
        assert_eq!(v.len(), 2);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![Effect::Sprint, Effect::Power]);
        assert!(TraitVector::empty().is_empty());
    }

    #[test]
    fn test_labels_round_trip() {
        for effect in Effect::ALL {
            assert_eq!(effect.label().parse::<Effect>().unwrap(), effect);
        }
        assert!("sprint".parse::<Effect>().is_err());
    }
}
