//! # Model Module
//!
//! The analyses run over one stallion/broodmare pair.
//!
//! ## Core Algorithms
//! - `cross`: inbreeding detection with lineage de-duplication
//! - `nitro`: trait aggregation over the distinct ancestors
//! - `patterns`: interesting / wonderful / elaborated classifications
//!
//! Every function here is pure: inputs are borrowed immutably and a fresh
//! value is returned. Nothing logs.

pub mod cross;
pub mod nitro;
pub mod patterns;

pub use cross::{detect_crosses, Cross, DANGER_BLOOD_VOLUME};
pub use nitro::{aggregate_nitro, Nitro};
pub use patterns::{is_elaborated, is_interesting, is_wonderful};
