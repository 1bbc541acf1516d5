//! # I/O Module
//!
//! File reading/writing boundaries. Loads the JSON dataset into the
//! in-memory model and writes analysis reports.

pub mod dataset;
pub mod report;

pub use dataset::{Dataset, DatasetPaths};
pub use report::ReportWriter;
