//! # Trait Roster
//!
//! Every known stallion, addressed by a dense integer id. Id 0 is reserved
//! for the empty/unknown sentinel: it has an empty name and no effects, and
//! every empty name in the dataset resolves to it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::data::effects::TraitVector;
use crate::data::properties::{BloodType, SirePedigree};
use crate::error::{BloodlineError, Result};

/// Zero-cost newtype for roster ids
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AncestorId(pub u32);

impl AncestorId {
    /// The empty/unknown ancestor
    pub const SENTINEL: AncestorId = AncestorId(0);

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }
}

impl From<u32> for AncestorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<AncestorId> for usize {
    fn from(id: AncestorId) -> usize {
        id.0 as usize
    }
}

impl std::fmt::Display for AncestorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only lookups the analysis needs from a roster
pub trait RosterLookup {
    /// Effects of the ancestor `id`
    fn effects(&self, id: AncestorId) -> Result<&TraitVector>;

    /// Id of the ancestor called `name`
    fn id_of(&self, name: &str) -> Result<AncestorId>;
}

/// One stallion of the roster
#[derive(Clone, Debug)]
pub struct RosterEntry {
    id: AncestorId,
    name: Arc<str>,
    pedigree: SirePedigree,
    blood: BloodType,
    effects: TraitVector,
}

impl RosterEntry {
    pub fn id(&self) -> AncestorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pedigree(&self) -> &SirePedigree {
        &self.pedigree
    }

    pub fn blood(&self) -> BloodType {
        self.blood
    }

    pub fn effects(&self) -> &TraitVector {
        &self.effects
    }
}

/// All known stallions with a name index
#[derive(Clone, Debug)]
pub struct TraitRoster {
    entries: Vec<RosterEntry>,
    /// Map from name to id for fast lookup
    id_by_name: HashMap<Arc<str>, AncestorId>,
}

impl TraitRoster {
    /// Create a roster holding only the sentinel
    pub fn new() -> Self {
        let sentinel = RosterEntry {
            id: AncestorId::SENTINEL,
            name: Arc::from(""),
            pedigree: SirePedigree::default(),
            blood: BloodType::UNKNOWN,
            effects: TraitVector::empty(),
        };
        let mut id_by_name = HashMap::new();
        id_by_name.insert(sentinel.name.clone(), AncestorId::SENTINEL);

        Self {
            entries: vec![sentinel],
            id_by_name,
        }
    }

    /// Append a stallion and return its id. Names must be unique and non-empty.
    pub fn insert(
        &mut self,
        name: &str,
        pedigree: SirePedigree,
        blood: BloodType,
        effects: TraitVector,
    ) -> Result<AncestorId> {
        if name.is_empty() {
            return Err(BloodlineError::parse("roster", "empty stallion name"));
        }
        if self.id_by_name.contains_key(name) {
            return Err(BloodlineError::parse(
                "roster",
                format!("duplicate stallion \"{name}\""),
            ));
        }

        let id = AncestorId::new(self.entries.len() as u32);
        let name: Arc<str> = Arc::from(name);
        self.id_by_name.insert(name.clone(), id);
        self.entries.push(RosterEntry {
            id,
            name,
            pedigree,
            blood,
            effects,
        });
        Ok(id)
    }

    /// Number of entries, sentinel included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when only the sentinel is present
    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }

    pub fn get(&self, id: AncestorId) -> Result<&RosterEntry> {
        self.entries
            .get(id.as_usize())
            .ok_or_else(|| BloodlineError::unknown_key("ancestor id", id.to_string()))
    }

    pub fn name_of(&self, id: AncestorId) -> Result<&str> {
        self.get(id).map(RosterEntry::name)
    }

    /// Entries in id order, sentinel first
    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }
}

impl Default for TraitRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterLookup for TraitRoster {
    fn effects(&self, id: AncestorId) -> Result<&TraitVector> {
        self.get(id).map(RosterEntry::effects)
    }

    fn id_of(&self, name: &str) -> Result<AncestorId> {
        self.id_by_name
            .get(name)
            .copied()
            .ok_or_else(|| BloodlineError::unknown_key("stallion", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::effects::Effect;

    fn roster_with(names: &[&str]) -> TraitRoster {
        let mut roster = TraitRoster::new();
        for name in names {
            roster
                .insert(name, SirePedigree::default(), BloodType::UNKNOWN, TraitVector::empty())
                .unwrap();
        }
        roster
    }

    #[test]
    fn test_sentinel_is_reserved() {
        let roster = TraitRoster::new();
        assert_eq!(roster.len(), 1);
        assert!(roster.is_empty());
        assert_eq!(roster.id_of("").unwrap(), AncestorId::SENTINEL);
        assert!(roster.effects(AncestorId::SENTINEL).unwrap().is_empty());
    }

    #[test]
    fn test_lookup_both_ways() {
        let roster = roster_with(&["Alpha", "Beta"]);
        let beta = roster.id_of("Beta").unwrap();
        assert_eq!(beta, AncestorId::new(2));
        assert_eq!(roster.name_of(beta).unwrap(), "Beta");
        assert!(matches!(
            roster.id_of("Gamma"),
            Err(BloodlineError::UnknownKey { .. })
        ));
        assert!(roster.get(AncestorId::new(3)).is_err());
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut roster = roster_with(&["Alpha"]);
        let effects = TraitVector::empty().with(Effect::Speed);
        assert!(roster
            .insert("Alpha", SirePedigree::default(), BloodType::UNKNOWN, effects)
            .is_err());
        assert!(roster
            .insert("", SirePedigree::default(), BloodType::UNKNOWN, effects)
            .is_err());
        assert_eq!(roster.len(), 2);
    }
}
