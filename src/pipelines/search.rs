//! # Mating Search
//!
//! ## Role
//! Enumerate mating plans over several generations and report each one.
//!
//! ## Plans
//! Names are given as `[sire, dam's sires..., broodmare]` with 2 to 4
//! entries, reading outward from the foal. The stallions after the first are
//! mated onto the broodmare line from the innermost outward, each producing a
//! synthetic daughter; the first stallion is analysed against the outermost
//! daughter:
//!
//! | names             | analysed mating                          |
//! |-------------------|------------------------------------------|
//! | `[s1, b]`         | `s1 × b`                                 |
//! | `[s1, s2, b]`     | `s1 × daughter(s2, b)`                   |
//! | `[s1, s2, s3, b]` | `s1 × daughter(s2, daughter(s3, b))`     |
//!
//! Any name may be [`WILDCARD`], which stands for every stallion (or every
//! broodmare in the last position) in sorted name order.

use tracing::{debug, info, instrument};

use crate::data::catalog::ProfileLookup;
use crate::data::profile::BroodmareProfile;
use crate::error::{BloodlineError, Result};
use crate::io::dataset::Dataset;
use crate::io::report::ReportWriter;
use crate::pipelines::analysis::{AnalysisEngine, AnalysisFlags};
use crate::utils::stats::RunStats;

/// Name that expands to every candidate in its position
pub const WILDCARD: &str = "all";

pub const MIN_NAMES: usize = 2;
pub const MAX_NAMES: usize = 4;

/// Candidate names per position, each list sorted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPlan {
    candidates: Vec<Vec<String>>,
}

impl SearchPlan {
    /// Resolve `names` against the dataset. Explicit names must exist.
    pub fn resolve(dataset: &Dataset, names: &[String]) -> Result<Self> {
        if !(MIN_NAMES..=MAX_NAMES).contains(&names.len()) {
            return Err(BloodlineError::config(format!(
                "expected {MIN_NAMES} to {MAX_NAMES} names, got {}",
                names.len()
            )));
        }

        let last = names.len() - 1;
        let catalog = &dataset.catalog;
        let candidates = names
            .iter()
            .enumerate()
            .map(|(i, name)| -> Result<Vec<String>> {
                let is_broodmare = i == last;
                if name == WILDCARD {
                    let all: Vec<String> = if is_broodmare {
                        catalog.broodmare_names().map(str::to_string).collect()
                    } else {
                        catalog.stallion_names().map(str::to_string).collect()
                    };
                    return Ok(all);
                }
                if is_broodmare {
                    catalog.broodmare(name)?;
                } else {
                    catalog.stallion(name)?;
                }
                Ok(vec![name.clone()])
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { candidates })
    }

    pub fn n_names(&self) -> usize {
        self.candidates.len()
    }

    /// Number of matings the plan expands to
    pub fn len(&self) -> usize {
        self.candidates.iter().map(Vec::len).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every combination, first position varying slowest
    pub fn combinations(&self) -> Combinations<'_> {
        Combinations {
            plan: self,
            cursor: vec![0; self.candidates.len()],
            done: self.is_empty(),
        }
    }

    /// Report column labels naming each parent's pedigree position
    pub fn labels(&self) -> &'static [&'static str] {
        match self.candidates.len() {
            2 => &["sire", "dam"],
            3 => &["sire", "dams_sire", "second_dam"],
            _ => &["sire", "dams_sire", "second_dams_sire", "third_dam"],
        }
    }
}

/// Iterator over the name combinations of a [`SearchPlan`]
pub struct Combinations<'a> {
    plan: &'a SearchPlan,
    cursor: Vec<usize>,
    done: bool,
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self
            .cursor
            .iter()
            .zip(&self.plan.candidates)
            .map(|(&i, names)| names[i].as_str())
            .collect();

        // Odometer step, last position fastest
        self.done = true;
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.plan.candidates[pos].len() {
                self.done = false;
                break;
            }
            self.cursor[pos] = 0;
        }
        Some(item)
    }
}

/// Runs a [`SearchPlan`] against a loaded dataset
pub struct SearchPipeline<'a> {
    dataset: &'a Dataset,
    flags: AnalysisFlags,
}

impl<'a> SearchPipeline<'a> {
    pub fn new(dataset: &'a Dataset, flags: AnalysisFlags) -> Self {
        Self { dataset, flags }
    }

    /// The dam a plan's first stallion is mated with
    pub fn dam_line(&self, names: &[&str]) -> Result<BroodmareProfile> {
        let catalog = &self.dataset.catalog;
        let (&broodmare, stallions) = names
            .split_last()
            .ok_or_else(|| BloodlineError::config("empty mating plan"))?;

        let mut dam = catalog.broodmare(broodmare)?.clone();
        for &dams_sire in stallions.iter().skip(1).rev() {
            dam = catalog.daughter(dams_sire, &dam)?;
        }
        Ok(dam)
    }

    /// Analyse every mating of `plan`, writing one report row each
    #[instrument(skip_all, fields(n_names = plan.n_names(), n_matings = plan.len()))]
    pub fn run(&self, plan: &SearchPlan, report: &mut ReportWriter) -> Result<RunStats> {
        let engine = AnalysisEngine::new(&self.dataset.roster, &self.dataset.pairs)
            .with_flags(self.flags);
        let mut stats = RunStats::new();
        report.write_header(plan.labels())?;

        for names in plan.combinations() {
            let sire = self.dataset.catalog.stallion(names[0])?;
            let dam = self.dam_line(&names)?;
            let result = engine.analyze(sire, &dam)?;

            report.write_row(&names, &result, &self.dataset.roster)?;
            stats.record(&result);
        }
        report.flush()?;

        debug!(elapsed_ms = stats.elapsed().as_millis() as u64, "search finished");
        info!(
            n_analysed = stats.n_analysed(),
            n_danger = stats.n_danger(),
            n_interesting = stats.n_interesting(),
            n_wonderful = stats.n_wonderful(),
            n_elaborated = stats.n_elaborated(),
            "search summary"
        );
        Ok(stats)
    }
}
