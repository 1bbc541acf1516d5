//! # Bloodline Library
//!
//! Pedigree analysis for stallion/broodmare matings: inbreeding crosses,
//! "nitro" trait scores and marker pattern checks over a fixed 16-slot
//! ancestor tree.
//!
//! ## Modules
//! - `config`: CLI argument parsing and validation
//! - `data`: In-memory stud book (slots, roster, profiles, elaborated pairs)
//! - `error`: Error types and result aliases
//! - `io`: JSON dataset loading and report writing
//! - `model`: Cross detection, nitro aggregation, pattern checks
//! - `pipelines`: Per-mating analysis and the multi-generation search
//! - `utils`: Shared utilities (run statistics)

pub mod config;
pub mod data;
pub mod error;
pub mod io;
pub mod model;
pub mod pipelines;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use data::catalog::{ProfileCatalog, ProfileLookup};
pub use data::elaborated::ElaboratedPairSet;
pub use data::profile::{AncestorChain, BroodmareProfile, StallionProfile};
pub use data::roster::{AncestorId, RosterLookup, TraitRoster};
pub use data::slot::{generation_of, Slot};
pub use error::{BloodlineError, Result};
pub use io::dataset::{Dataset, DatasetPaths};
pub use io::report::ReportWriter;
pub use model::cross::Cross;
pub use model::nitro::Nitro;
pub use pipelines::{AnalysisEngine, AnalysisFlags, AnalysisResult, SearchPipeline, SearchPlan};
