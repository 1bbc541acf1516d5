//! # Dataset Ingestion
//!
//! Load the four JSON files of a stud-book dataset into the in-memory model:
//!
//! | file                      | content                                   |
//! |---------------------------|-------------------------------------------|
//! | `stallions.json`          | roster: every stallion, its sires, effects |
//! | `default_stallions.json`  | stallion profiles available for mating    |
//! | `default_broodmares.json` | broodmare profiles available for mating   |
//! | `elaborated.json`         | `[stallion side, broodmare side]` pairs    |
//!
//! The roster is loaded first; everything else refers to stallions by name
//! and is resolved through it. Empty names resolve to the sentinel.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info_span};

use crate::data::catalog::ProfileCatalog;
use crate::data::effects::{Effect, TraitVector};
use crate::data::elaborated::ElaboratedPairSet;
use crate::data::profile::{
    AncestorChain, BroodmareAttributes, BroodmareProfile, StallionAttributes, StallionProfile,
};
use crate::data::properties::{BloodType, Dirt, Distance, Grade, Growth, SirePedigree};
use crate::data::roster::{AncestorId, RosterLookup, TraitRoster};
use crate::data::slot::N_SLOTS;
use crate::error::{BloodlineError, Result};

pub const ROSTER_FILE: &str = "stallions.json";
pub const STALLIONS_FILE: &str = "default_stallions.json";
pub const BROODMARES_FILE: &str = "default_broodmares.json";
pub const ELABORATED_FILE: &str = "elaborated.json";

/// Locations of the four dataset files
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetPaths {
    pub roster: PathBuf,
    pub stallions: PathBuf,
    pub broodmares: PathBuf,
    pub elaborated: PathBuf,
}

impl DatasetPaths {
    /// The default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            roster: dir.join(ROSTER_FILE),
            stallions: dir.join(STALLIONS_FILE),
            broodmares: dir.join(BROODMARES_FILE),
            elaborated: dir.join(ELABORATED_FILE),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [&self.roster, &self.stallions, &self.broodmares, &self.elaborated]
            .into_iter()
            .map(PathBuf::as_path)
    }
}

/// Everything an analysis run needs, loaded once
#[derive(Clone, Debug)]
pub struct Dataset {
    pub roster: TraitRoster,
    pub catalog: ProfileCatalog,
    pub pairs: ElaboratedPairSet,
}

impl Dataset {
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        let roster = load_roster(&paths.roster)?;
        let mut catalog = ProfileCatalog::new();
        load_stallions(&paths.stallions, &roster, &mut catalog)?;
        load_broodmares(&paths.broodmares, &roster, &mut catalog)?;
        let pairs = load_elaborated(&paths.elaborated, &roster)?;

        Ok(Self {
            roster,
            catalog,
            pairs,
        })
    }
}

#[derive(Deserialize)]
struct RosterRecord {
    name: String,
    ancestors: [String; 4],
    blood: u32,
    #[serde(default)]
    effects: Vec<String>,
}

#[derive(Deserialize)]
struct StallionRecord {
    name: String,
    ancestors: [String; 4],
    indices: [u32; 8],
    fee: u32,
    min: u32,
    max: u32,
    growth: String,
    dirt: String,
    health: String,
    temper: String,
    achievement: String,
    spirit: String,
    stable: String,
}

#[derive(Deserialize)]
struct BroodmareRecord {
    name: String,
    ancestors: [String; 4],
    indices: [u32; 4],
    fee: u32,
    speed: u32,
    stamina: u32,
    power: u32,
    dirt: String,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => BloodlineError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => BloodlineError::Io(e),
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load the roster. Entry 0 is the sentinel; file entries follow in order.
pub fn load_roster(path: &Path) -> Result<TraitRoster> {
    let _span = info_span!("load_roster", path = %path.display()).entered();
    let file = file_label(path);
    let records: Vec<RosterRecord> = read_json(path)?;

    let mut roster = TraitRoster::new();
    for record in records {
        let blood = BloodType::from_index(record.blood)
            .map_err(|e| BloodlineError::parse(&file, format!("{}: {e}", record.name)))?;
        let effects = record
            .effects
            .iter()
            .map(|label| label.parse::<Effect>())
            .collect::<Result<TraitVector>>()
            .map_err(|e| BloodlineError::parse(&file, format!("{}: {e}", record.name)))?;
        roster.insert(&record.name, SirePedigree::new(record.ancestors), blood, effects)?;
    }

    debug!(n_stallions = roster.len() - 1, "roster loaded");
    Ok(roster)
}

/// Roster id of the sire `generation` steps down `id`'s dam line
fn sire_of(roster: &TraitRoster, id: AncestorId, generation: usize) -> Result<AncestorId> {
    let entry = roster.get(id)?;
    let name = entry.pedigree().sire(generation).unwrap_or("");
    roster.id_of(name)
}

/// Expand a horse's four named sires into the 16-slot chain.
///
/// `subject` fills slot 0: the stallion's own id, or the sentinel for a
/// broodmare. The remaining slots are reached through the roster's own sire
/// records (see the layout in [`crate::data::slot`]).
pub fn build_chain(
    roster: &TraitRoster,
    subject: AncestorId,
    sires: &[String; 4],
) -> Result<AncestorChain> {
    let mut ids = [AncestorId::SENTINEL; N_SLOTS];
    ids[0] = subject;

    ids[1] = roster.id_of(&sires[0])?;
    ids[2] = sire_of(roster, ids[1], 0)?;
    ids[6] = sire_of(roster, ids[1], 1)?;
    ids[8] = sire_of(roster, ids[1], 2)?;
    ids[3] = sire_of(roster, ids[2], 0)?;
    ids[5] = sire_of(roster, ids[2], 1)?;
    ids[4] = sire_of(roster, ids[3], 0)?;
    ids[7] = sire_of(roster, ids[6], 0)?;

    ids[9] = roster.id_of(&sires[1])?;
    ids[10] = sire_of(roster, ids[9], 0)?;
    ids[12] = sire_of(roster, ids[9], 1)?;
    ids[11] = sire_of(roster, ids[10], 0)?;

    ids[13] = roster.id_of(&sires[2])?;
    ids[14] = sire_of(roster, ids[13], 0)?;

    ids[15] = roster.id_of(&sires[3])?;

    Ok(AncestorChain::new(ids))
}

fn decode<T>(file: &str, horse: &str, field: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr<Err = BloodlineError>,
{
    value
        .parse()
        .map_err(|e| BloodlineError::parse(file, format!("{horse}: {field}: {e}")))
}

pub fn load_stallions(
    path: &Path,
    roster: &TraitRoster,
    catalog: &mut ProfileCatalog,
) -> Result<()> {
    let _span = info_span!("load_stallions", path = %path.display()).entered();
    let file = file_label(path);
    let records: Vec<StallionRecord> = read_json(path)?;
    let n_records = records.len();

    for r in records {
        let subject = roster.id_of(&r.name)?;
        let ancestors = build_chain(roster, subject, &r.ancestors)?;

        let dirt: Dirt = decode(&file, &r.name, "dirt", &r.dirt)?;
        if dirt == Dirt::Unknown {
            let message = format!("{}: dirt aptitude must be known", r.name);
            return Err(BloodlineError::parse(&file, message));
        }
        let attributes = StallionAttributes {
            fee: r.fee,
            distance: Distance::new(r.min, r.max),
            growth: decode::<Growth>(&file, &r.name, "growth", &r.growth)?,
            dirt,
            health: decode::<Grade>(&file, &r.name, "health", &r.health)?,
            temper: decode::<Grade>(&file, &r.name, "temper", &r.temper)?,
            achievement: decode::<Grade>(&file, &r.name, "achievement", &r.achievement)?,
            spirit: decode::<Grade>(&file, &r.name, "spirit", &r.spirit)?,
            stable: decode::<Grade>(&file, &r.name, "stable", &r.stable)?,
        };

        catalog.insert_stallion(
            &r.name,
            StallionProfile::with_attributes(ancestors, r.indices, attributes),
        )?;
    }

    debug!(n_records, "stallion profiles loaded");
    Ok(())
}

pub fn load_broodmares(
    path: &Path,
    roster: &TraitRoster,
    catalog: &mut ProfileCatalog,
) -> Result<()> {
    let _span = info_span!("load_broodmares", path = %path.display()).entered();
    let file = file_label(path);
    let records: Vec<BroodmareRecord> = read_json(path)?;
    let n_records = records.len();

    for r in records {
        let ancestors = build_chain(roster, AncestorId::SENTINEL, &r.ancestors)?;

        let dirt: Dirt = decode(&file, &r.name, "dirt", &r.dirt)?;
        if dirt == Dirt::Bad {
            let message = format!("{}: unexpected dirt aptitude \"{}\"", r.name, r.dirt);
            return Err(BloodlineError::parse(&file, message));
        }
        let attributes = BroodmareAttributes {
            fee: r.fee,
            speed: r.speed,
            stamina: r.stamina,
            power: r.power,
            dirt,
        };

        catalog.insert_broodmare(
            &r.name,
            BroodmareProfile::with_attributes(ancestors, r.indices, attributes),
        )?;
    }

    debug!(n_records, "broodmare profiles loaded");
    Ok(())
}

pub fn load_elaborated(path: &Path, roster: &TraitRoster) -> Result<ElaboratedPairSet> {
    let _span = info_span!("load_elaborated", path = %path.display()).entered();
    let records: Vec<(String, String)> = read_json(path)?;

    let mut pairs = ElaboratedPairSet::new();
    for (stallion_side, broodmare_side) in &records {
        pairs.insert(roster.id_of(stallion_side)?, roster.id_of(broodmare_side)?);
    }

    debug!(n_pairs = pairs.len(), "elaborated pairs loaded");
    Ok(pairs)
}
