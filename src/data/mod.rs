//! # Data Module
//!
//! In-memory representations of the stud book. This is the core "Model" layer.
//!
//! ## Design
//! - **Zero-cost newtypes:** `Slot` and `AncestorId` keep tree positions and
//!   roster ids apart; a `Slot` can only hold `0..=15`.
//! - **Fixed-size records:** ancestor chains are `[AncestorId; 16]`, markers are
//!   `[u32; 8]` / `[u32; 4]`. Nothing is resized after construction.
//! - **Read-only after load:** the roster, catalog and pair set are built by
//!   `io::dataset` and only borrowed immutably afterwards.

pub mod catalog;
pub mod effects;
pub mod elaborated;
pub mod profile;
pub mod properties;
pub mod roster;
pub mod slot;

// Re-export commonly used types
pub use catalog::{ProfileCatalog, ProfileLookup};
pub use effects::{Effect, TraitVector, N_EFFECTS};
pub use elaborated::ElaboratedPairSet;
pub use profile::{
    AncestorChain, BroodmareAttributes, BroodmareProfile, StallionAttributes, StallionProfile,
};
pub use properties::{BloodType, Dirt, Distance, Grade, Growth, SirePedigree};
pub use roster::{AncestorId, RosterEntry, RosterLookup, TraitRoster};
pub use slot::{generation_of, Slot, ELABORATED_SLOTS, N_SLOTS};
