//! # Configuration Logic
//!
//! ## Role
//! CLI argument parsing and validation.
//!
//! ## Fields
//! - `names` - 2 to 4 positional names, `[sire, dam's sires..., broodmare]`,
//!   any of which may be `all`
//! - `data_dir` - Directory holding the dataset files (default: `database`)
//! - `roster`, `stallions`, `broodmares`, `elaborated` - Per-file overrides
//! - `out` - Report file (default: stdout)
//! - `no_*` - Analysis toggles
//! - `profile` - Span timing output on stderr
//!
//! ## Validation
//! - Ensure the name count is in range
//! - Ensure every dataset file exists
//!
//! ## Example CLI
//! ```bash
//! bloodline all "Mare Name" --data-dir database --out report.csv
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{BloodlineError, Result};
use crate::io::dataset::DatasetPaths;
use crate::pipelines::analysis::AnalysisFlags;
use crate::pipelines::search::{MAX_NAMES, MIN_NAMES};

#[derive(Parser, Debug, Clone)]
#[command(name = "bloodline")]
#[command(about = "Pedigree cross and nitro analysis for stallion/broodmare matings")]
#[command(version)]
pub struct Config {
    /// Sire, then the dam's sires nearest first, then a broodmare; `all` matches
    /// every entry
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Directory holding the dataset files
    #[arg(long, short = 'd', default_value = "database")]
    pub data_dir: PathBuf,

    /// Roster file (default: <data-dir>/stallions.json)
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Stallion profiles (default: <data-dir>/default_stallions.json)
    #[arg(long)]
    pub stallions: Option<PathBuf>,

    /// Broodmare profiles (default: <data-dir>/default_broodmares.json)
    #[arg(long)]
    pub broodmares: Option<PathBuf>,

    /// Elaborated pairs (default: <data-dir>/elaborated.json)
    #[arg(long)]
    pub elaborated: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    #[arg(long)]
    pub no_interesting: bool,

    #[arg(long)]
    pub no_wonderful: bool,

    #[arg(long)]
    pub no_elaborated: bool,

    #[arg(long)]
    pub no_cross: bool,

    #[arg(long)]
    pub no_nitro: bool,

    /// Print span timings to stderr
    #[arg(long)]
    pub profile: bool,
}

impl Config {
    /// Parse the process arguments and validate them
    pub fn parse_and_validate() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Parse an explicit argument list; usage errors become `Config` errors
    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let config =
            Self::try_parse_from(args).map_err(|e| BloodlineError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_NAMES..=MAX_NAMES).contains(&self.names.len()) {
            return Err(BloodlineError::config(format!(
                "expected {MIN_NAMES} to {MAX_NAMES} names (stallions then a broodmare), got {}",
                self.names.len()
            )));
        }

        for path in self.dataset_paths().iter() {
            if !path.exists() {
                return Err(BloodlineError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }

    pub fn dataset_paths(&self) -> DatasetPaths {
        let defaults = DatasetPaths::in_dir(&self.data_dir);
        DatasetPaths {
            roster: self.roster.clone().unwrap_or(defaults.roster),
            stallions: self.stallions.clone().unwrap_or(defaults.stallions),
            broodmares: self.broodmares.clone().unwrap_or(defaults.broodmares),
            elaborated: self.elaborated.clone().unwrap_or(defaults.elaborated),
        }
    }

    pub fn flags(&self) -> AnalysisFlags {
        AnalysisFlags {
            interesting: !self.no_interesting,
            wonderful: !self.no_wonderful,
            elaborated: !self.no_elaborated,
            cross: !self.no_cross,
            nitro: !self.no_nitro,
        }
    }
}
