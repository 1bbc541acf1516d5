//! # Elaborated Pairs
//!
//! Historically notable (stallion-side, broodmare-side) ancestor pairs.
//! Membership only; the pair order matters.

use std::collections::{HashMap, HashSet};

use crate::data::roster::AncestorId;

#[derive(Clone, Debug, Default)]
pub struct ElaboratedPairSet {
    pairs: HashMap<AncestorId, HashSet<AncestorId>>,
}

impl ElaboratedPairSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stallion_side: AncestorId, broodmare_side: AncestorId) {
        self.pairs
            .entry(stallion_side)
            .or_default()
            .insert(broodmare_side);
    }

    #[inline]
    pub fn has_pair(&self, stallion_side: AncestorId, broodmare_side: AncestorId) -> bool {
        self.pairs
            .get(&stallion_side)
            .is_some_and(|set| set.contains(&broodmare_side))
    }

    /// Number of distinct pairs
    pub fn len(&self) -> usize {
        self.pairs.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(AncestorId, AncestorId)> for ElaboratedPairSet {
    fn from_iter<I: IntoIterator<Item = (AncestorId, AncestorId)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (a, b) in iter {
            set.insert(a, b);
        }
        set
    }
}
