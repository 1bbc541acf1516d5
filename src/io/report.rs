//! # Report Writer
//!
//! Comma-separated output, one row per analysed mating:
//!
//! ```text
//! <parent names...>,elaborated,interesting,wonderful,danger,<11 effect totals>,SP,ST,PW
//! ```
//!
//! Booleans are written as `0`/`1`. Effect totals count the crossed
//! ancestors carrying each effect, in [`Effect::ALL`] order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::data::effects::{Effect, N_EFFECTS};
use crate::data::roster::RosterLookup;
use crate::error::Result;
use crate::pipelines::analysis::AnalysisResult;

pub struct ReportWriter {
    writer: Box<dyn Write>,
}

impl ReportWriter {
    /// Create a report file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn stdout() -> Self {
        Self::from_writer(BufWriter::new(std::io::stdout()))
    }

    pub fn from_writer(writer: impl Write + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Write the header line for rows with `labels` as parent columns
    pub fn write_header(&mut self, labels: &[&str]) -> Result<()> {
        let mut columns: Vec<&str> = labels.to_vec();
        columns.extend(["elaborated", "interesting", "wonderful", "danger"]);
        columns.extend(Effect::ALL.iter().map(|e| e.name()));
        columns.extend(["SP", "ST", "PW"]);
        writeln!(self.writer, "{}", columns.join(","))?;
        Ok(())
    }

    pub fn write_row<R: RosterLookup + ?Sized>(
        &mut self,
        names: &[&str],
        result: &AnalysisResult,
        roster: &R,
    ) -> Result<()> {
        let line = format_row(names, result, roster)?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Render one report row without the trailing newline
pub fn format_row<R: RosterLookup + ?Sized>(
    names: &[&str],
    result: &AnalysisResult,
    roster: &R,
) -> Result<String> {
    let cross = result.cross();
    let totals = if cross.is_empty() {
        [0; N_EFFECTS]
    } else {
        cross.effect_totals(roster)?
    };
    let nitro = result.nitro();

    let mut fields: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    for flag in [
        result.is_elaborated(),
        result.is_interesting(),
        result.is_wonderful(),
        cross.any_danger(),
    ] {
        fields.push(u8::from(flag).to_string());
    }
    fields.extend(totals.iter().map(u32::to_string));
    fields.push(nitro.speed_score().to_string());
    fields.push(nitro.stamina_score().to_string());
    fields.push(nitro.power_score().to_string());

    Ok(fields.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::effects::TraitVector;
    use crate::data::elaborated::ElaboratedPairSet;
    use crate::data::profile::{AncestorChain, BroodmareProfile, StallionProfile};
    use crate::data::properties::{BloodType, SirePedigree};
    use crate::data::roster::TraitRoster;
    use crate::pipelines::analysis::{analyze, AnalysisFlags};
    use std::sync::{Arc, Mutex};

    /// Writer that keeps what it receives for inspection
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_header_columns() {
        let buf = SharedBuf::default();
        let mut report = ReportWriter::from_writer(buf.clone());
        report.write_header(&["sire", "broodmare"]).unwrap();
        report.flush().unwrap();

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            text,
            "sire,broodmare,elaborated,interesting,wonderful,danger,\
             sprint,speed,stamina,spirit,stable,temper,precocious,altrical,tough,dirt,power,\
             SP,ST,PW\n"
        );
    }

    #[test]
    fn test_row_with_shared_sire() {
        let mut roster = TraitRoster::new();
        let shared = TraitVector::empty().with(Effect::Sprint).with(Effect::Speed);
        roster
            .insert("Shared", SirePedigree::default(), BloodType::UNKNOWN, shared)
            .unwrap();
        roster
            .insert(
                "Sire",
                SirePedigree::default(),
                BloodType::UNKNOWN,
                TraitVector::empty(),
            )
            .unwrap();

        let stallion = StallionProfile::new(
            AncestorChain::from_raw([2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            [0; 8],
        );
        let broodmare = BroodmareProfile::new(
            AncestorChain::from_raw([0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            [0; 4],
        );
        let pairs = ElaboratedPairSet::new();
        let result = analyze(&stallion, &broodmare, &roster, &pairs, AnalysisFlags::ALL).unwrap();

        let row = format_row(&["Sire", "Mare"], &result, &roster).unwrap();
        assert_eq!(row, "Sire,Mare,0,0,1,1,1,1,0,0,0,0,0,0,0,0,0,3,-1,0");
    }

    #[test]
    fn test_row_without_crosses() {
        let roster = TraitRoster::new();
        let result = AnalysisResult::default();
        let row = format_row(&["A", "B"], &result, &roster).unwrap();
        assert_eq!(row, "A,B,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0");
    }
}
