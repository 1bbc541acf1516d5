//! # Horse Properties
//!
//! Scalar attributes carried on roster entries and profiles. None of these
//! feed the analysis core; they are decoded at ingestion and carried through
//! for callers.
//!
//! The dataset uses localized labels for most enums. Each enum owns its label
//! table as a `const` and decodes through `FromStr`.

use std::fmt;
use std::str::FromStr;

use crate::error::{BloodlineError, Result};

/// Bloodline family ("blood type"), index 0 meaning unknown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BloodType(u8);

/// Index → short code. The reverse direction scans this same table.
const BLOOD_CODES: [&str; 16] = [
    "", "Ec", "Ph", "Ns", "Ro", "Ne", "Na", "Fa", "To", "Te", "Sw", "Ha", "Hi", "St", "Ma", "He",
];

impl BloodType {
    pub const UNKNOWN: BloodType = BloodType(0);

    pub fn from_index(index: u32) -> Result<Self> {
        if index as usize >= BLOOD_CODES.len() {
            return Err(BloodlineError::unknown_key("blood type index", index.to_string()));
        }
        Ok(Self(index as u8))
    }

    pub fn index(self) -> u32 {
        self.0 as u32
    }

    pub fn code(self) -> &'static str {
        BLOOD_CODES[self.0 as usize]
    }
}

impl FromStr for BloodType {
    type Err = BloodlineError;

    fn from_str(s: &str) -> Result<Self> {
        BLOOD_CODES
            .iter()
            .position(|&code| code == s)
            .map(|i| BloodType(i as u8))
            .ok_or_else(|| BloodlineError::unknown_key("blood type", s))
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Growth curve of a stallion's offspring
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Growth {
    Precocious,
    Normal,
    Persistent,
    Altrical,
    #[default]
    Unknown,
}

impl FromStr for Growth {
    type Err = BloodlineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "早熟" => Ok(Growth::Precocious),
            "普通" => Ok(Growth::Normal),
            "持続" => Ok(Growth::Persistent),
            "晩成" => Ok(Growth::Altrical),
            _ => Err(BloodlineError::unknown_key("growth", s)),
        }
    }
}

/// Three-step quality grade
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Grade {
    A,
    B,
    C,
    #[default]
    Unknown,
}

impl FromStr for Grade {
    type Err = BloodlineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            _ => Err(BloodlineError::unknown_key("grade", s)),
        }
    }
}

/// Aptitude on dirt tracks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Dirt {
    Good,
    Normal,
    Bad,
    #[default]
    Unknown,
}

impl FromStr for Dirt {
    type Err = BloodlineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "◎" => Ok(Dirt::Good),
            "○" => Ok(Dirt::Normal),
            "△" => Ok(Dirt::Bad),
            "?" => Ok(Dirt::Unknown),
            _ => Err(BloodlineError::unknown_key("dirt aptitude", s)),
        }
    }
}

/// Suitable race distance range in metres
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Distance {
    pub min: u32,
    pub max: u32,
}

impl Distance {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// The four recorded sire names of a roster entry: sire, dam's sire,
/// 2nd dam's sire, 3rd dam's sire. Empty names mean unknown.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SirePedigree {
    sires: [String; 4],
}

impl SirePedigree {
    pub fn new(sires: [String; 4]) -> Self {
        Self { sires }
    }

    /// Sire name `generation` steps down the dam line (0 = sire)
    pub fn sire(&self, generation: usize) -> Option<&str> {
        self.sires.get(generation).map(String::as_str)
    }

    pub fn sires(&self) -> &[String; 4] {
        &self.sires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_type_both_directions() {
        for index in 0..16 {
            let blood = BloodType::from_index(index).unwrap();
            assert_eq!(blood.code().parse::<BloodType>().unwrap(), blood);
            assert_eq!(blood.index(), index);
        }
        assert_eq!("Ns".parse::<BloodType>().unwrap().index(), 3);
        assert_eq!(BloodType::from_index(15).unwrap().code(), "He");
        assert!(BloodType::from_index(16).is_err());
        assert!("Xx".parse::<BloodType>().is_err());
    }

    #[test]
    fn test_localized_labels() {
        assert_eq!("持続".parse::<Growth>().unwrap(), Growth::Persistent);
        assert_eq!("◎".parse::<Dirt>().unwrap(), Dirt::Good);
        assert_eq!("?".parse::<Dirt>().unwrap(), Dirt::Unknown);
        assert_eq!("B".parse::<Grade>().unwrap(), Grade::B);
        assert!("D".parse::<Grade>().is_err());
        assert!("fast".parse::<Growth>().is_err());
    }

    #[test]
    fn test_pedigree_access() {
        let pedigree = SirePedigree::new([
            "A".to_string(),
            "B".to_string(),
            String::new(),
            "D".to_string(),
        ]);
        assert_eq!(pedigree.sire(0), Some("A"));
        assert_eq!(pedigree.sire(2), Some(""));
        assert_eq!(pedigree.sire(4), None);
    }
}
