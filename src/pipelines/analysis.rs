//! # Pedigree Analysis
//!
//! ## Role
//! Run the cross, nitro and pattern analyses over one stallion/broodmare pair
//! and bundle them into an immutable [`AnalysisResult`].
//!
//! ## Entry Points
//! ```rust,ignore
//! pub fn analyze(
//!     stallion: &StallionProfile,
//!     broodmare: &BroodmareProfile,
//!     roster: &impl RosterLookup,
//!     pairs: &ElaboratedPairSet,
//!     flags: AnalysisFlags,
//! ) -> Result<AnalysisResult>;
//!
//! // Same thing with the shared inputs bound once
//! AnalysisEngine::new(&roster, &pairs).analyze(&stallion, &broodmare)?;
//! ```
//!
//! `flags` only skips work. A skipped analysis reports `false`, an empty
//! cross or zero nitro; an analysis that runs gives the same answer whatever
//! the other flags say.

use crate::data::elaborated::ElaboratedPairSet;
use crate::data::profile::{BroodmareProfile, StallionProfile};
use crate::data::roster::RosterLookup;
use crate::error::Result;
use crate::model::cross::{detect_crosses, Cross};
use crate::model::nitro::{aggregate_nitro, Nitro};
use crate::model::patterns::{is_elaborated, is_interesting, is_wonderful};

/// Which analyses to run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisFlags {
    pub interesting: bool,
    pub wonderful: bool,
    pub elaborated: bool,
    pub cross: bool,
    pub nitro: bool,
}

impl AnalysisFlags {
    pub const ALL: AnalysisFlags = AnalysisFlags {
        interesting: true,
        wonderful: true,
        elaborated: true,
        cross: true,
        nitro: true,
    };

    pub const NONE: AnalysisFlags = AnalysisFlags {
        interesting: false,
        wonderful: false,
        elaborated: false,
        cross: false,
        nitro: false,
    };
}

impl Default for AnalysisFlags {
    fn default() -> Self {
        Self::ALL
    }
}

/// Outcome of analysing one mating
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    interesting: bool,
    wonderful: bool,
    elaborated: bool,
    cross: Cross,
    nitro: Nitro,
}

impl AnalysisResult {
    pub fn is_interesting(&self) -> bool {
        self.interesting
    }

    pub fn is_wonderful(&self) -> bool {
        self.wonderful
    }

    pub fn is_elaborated(&self) -> bool {
        self.elaborated
    }

    pub fn cross(&self) -> &Cross {
        &self.cross
    }

    pub fn nitro(&self) -> &Nitro {
        &self.nitro
    }
}

/// Analyse one stallion/broodmare pair
pub fn analyze<R: RosterLookup + ?Sized>(
    stallion: &StallionProfile,
    broodmare: &BroodmareProfile,
    roster: &R,
    pairs: &ElaboratedPairSet,
    flags: AnalysisFlags,
) -> Result<AnalysisResult> {
    let nitro = if flags.nitro {
        aggregate_nitro(stallion.ancestors(), broodmare.ancestors(), roster)?
    } else {
        Nitro::default()
    };

    let cross = if flags.cross {
        detect_crosses(stallion.ancestors(), broodmare.ancestors())
    } else {
        Cross::default()
    };

    Ok(AnalysisResult {
        interesting: flags.interesting && is_interesting(stallion, broodmare),
        wonderful: flags.wonderful && is_wonderful(stallion, broodmare),
        elaborated: flags.elaborated && is_elaborated(stallion, broodmare, pairs),
        cross,
        nitro,
    })
}

/// Shared read-only inputs bound once for many analyses
pub struct AnalysisEngine<'a, R: RosterLookup + ?Sized> {
    roster: &'a R,
    pairs: &'a ElaboratedPairSet,
    flags: AnalysisFlags,
}

// Manual impls: only references are copied, so `R` need not be `Copy`.
impl<R: RosterLookup + ?Sized> Clone for AnalysisEngine<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: RosterLookup + ?Sized> Copy for AnalysisEngine<'_, R> {}

impl<'a, R: RosterLookup + ?Sized> AnalysisEngine<'a, R> {
    pub fn new(roster: &'a R, pairs: &'a ElaboratedPairSet) -> Self {
        Self {
            roster,
            pairs,
            flags: AnalysisFlags::ALL,
        }
    }

    pub fn with_flags(mut self, flags: AnalysisFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn flags(&self) -> AnalysisFlags {
        self.flags
    }

    pub fn roster(&self) -> &'a R {
        self.roster
    }

    pub fn analyze(
        &self,
        stallion: &StallionProfile,
        broodmare: &BroodmareProfile,
    ) -> Result<AnalysisResult> {
        analyze(stallion, broodmare, self.roster, self.pairs, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::effects::{Effect, TraitVector};
    use crate::data::profile::AncestorChain;
    use crate::data::properties::{BloodType, SirePedigree};
    use crate::data::roster::{AncestorId, TraitRoster};
    use crate::error::BloodlineError;

    struct Fixture {
        roster: TraitRoster,
        pairs: ElaboratedPairSet,
        stallion: StallionProfile,
        broodmare: BroodmareProfile,
    }

    /// Ids 1..=40; stallion uses 1..=15, broodmare 21..=35 except that
    /// id 1 is also the broodmare's dam's sire.
    fn fixture() -> Fixture {
        let mut roster = TraitRoster::new();
        for i in 1..=40 {
            let effects = match i {
                1 => TraitVector::empty().with(Effect::Sprint).with(Effect::Speed),
                2 => TraitVector::empty().with(Effect::Power),
                _ => TraitVector::empty(),
            };
            roster
                .insert(&format!("h{i}"), SirePedigree::default(), BloodType::UNKNOWN, effects)
                .unwrap();
        }

        let stallion_ids: [u32; 16] = std::array::from_fn(|i| if i == 0 { 40 } else { i as u32 });
        let mut broodmare_ids: [u32; 16] =
            std::array::from_fn(|i| if i == 0 { 0 } else { 20 + i as u32 });
        broodmare_ids[9] = 1;

        let mut pairs = ElaboratedPairSet::new();
        pairs.insert(AncestorId::new(2), AncestorId::new(22));

        Fixture {
            roster,
            pairs,
            stallion: StallionProfile::new(
                AncestorChain::from_raw(stallion_ids),
                [1, 5, 2, 6, 3, 7, 4, 8],
            ),
            broodmare: BroodmareProfile::new(AncestorChain::from_raw(broodmare_ids), [5, 6, 7, 8]),
        }
    }

    #[test]
    fn test_full_analysis() {
        let f = fixture();
        let flags = AnalysisFlags::ALL;
        let result = analyze(&f.stallion, &f.broodmare, &f.roster, &f.pairs, flags).unwrap();

        assert!(result.is_interesting());
        assert!(result.is_wonderful());
        assert!(result.is_elaborated());

        let id = AncestorId::new(1);
        assert_eq!(result.cross().num_crosses(), 1);
        assert_eq!(result.cross().generations(id).unwrap(), &[3, 1]);
        assert!(result.cross().is_danger(id).unwrap());

        assert_eq!(result.nitro().speed_score(), 3);
        assert_eq!(result.nitro().stamina_score(), -1);
        assert_eq!(result.nitro().power_score(), 1);
    }

    #[test]
    fn test_flags_only_skip_work() {
        let f = fixture();
        let engine = AnalysisEngine::new(&f.roster, &f.pairs);
        let full = engine.analyze(&f.stallion, &f.broodmare).unwrap();

        let none = engine
            .with_flags(AnalysisFlags::NONE)
            .analyze(&f.stallion, &f.broodmare)
            .unwrap();
        assert_eq!(none, AnalysisResult::default());

        let cross_only = engine
            .with_flags(AnalysisFlags {
                cross: true,
                ..AnalysisFlags::NONE
            })
            .analyze(&f.stallion, &f.broodmare)
            .unwrap();
        assert_eq!(cross_only.cross(), full.cross());
        assert_eq!(*cross_only.nitro(), Nitro::default());

        let nitro_only = engine
            .with_flags(AnalysisFlags {
                nitro: true,
                ..AnalysisFlags::NONE
            })
            .analyze(&f.stallion, &f.broodmare)
            .unwrap();
        assert_eq!(nitro_only.nitro(), full.nitro());
        assert!(nitro_only.cross().is_empty());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let f = fixture();
        let engine = AnalysisEngine::new(&f.roster, &f.pairs);
        let first = engine.analyze(&f.stallion, &f.broodmare).unwrap();
        let second = engine.analyze(&f.stallion, &f.broodmare).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_ancestor_fails_whole_analysis() {
        let f = fixture();
        let ids: [u32; 16] = std::array::from_fn(|i| if i == 3 { 99 } else { 0 });
        let stray = BroodmareProfile::new(AncestorChain::from_raw(ids), [0; 4]);
        let err =
            analyze(&f.stallion, &stray, &f.roster, &f.pairs, AnalysisFlags::ALL).unwrap_err();
        assert!(matches!(err, BloodlineError::UnknownKey { .. }));

        // without nitro the roster is never consulted
        let flags = AnalysisFlags {
            nitro: false,
            ..AnalysisFlags::ALL
        };
        assert!(analyze(&f.stallion, &stray, &f.roster, &f.pairs, flags).is_ok());
    }
}
