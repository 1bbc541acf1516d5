//! # Pipeline Module
//!
//! High-level orchestration: the per-mating analysis engine and the search
//! driver that enumerates mating plans and reports them.

pub mod analysis;
pub mod search;

pub use analysis::{analyze, AnalysisEngine, AnalysisFlags, AnalysisResult};
pub use search::{SearchPipeline, SearchPlan, WILDCARD};
