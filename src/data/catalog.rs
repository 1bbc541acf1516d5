//! # Profile Catalog
//!
//! The named stallion and broodmare profiles available for mating plans.
//! Names are kept sorted so enumeration order is stable.

use std::collections::BTreeMap;

use crate::data::profile::{BroodmareProfile, StallionProfile};
use crate::error::{BloodlineError, Result};

/// Read-only lookups of profiles by name
pub trait ProfileLookup {
    fn stallion(&self, name: &str) -> Result<&StallionProfile>;

    fn broodmare(&self, name: &str) -> Result<&BroodmareProfile>;
}

#[derive(Clone, Debug, Default)]
pub struct ProfileCatalog {
    stallions: BTreeMap<String, StallionProfile>,
    broodmares: BTreeMap<String, BroodmareProfile>,
}

impl ProfileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_stallion(&mut self, name: &str, profile: StallionProfile) -> Result<()> {
        if self.stallions.contains_key(name) {
            return Err(BloodlineError::parse(
                "stallion profiles",
                format!("duplicate stallion \"{name}\""),
            ));
        }
        self.stallions.insert(name.to_string(), profile);
        Ok(())
    }

    pub fn insert_broodmare(&mut self, name: &str, profile: BroodmareProfile) -> Result<()> {
        if self.broodmares.contains_key(name) {
            return Err(BloodlineError::parse(
                "broodmare profiles",
                format!("duplicate broodmare \"{name}\""),
            ));
        }
        self.broodmares.insert(name.to_string(), profile);
        Ok(())
    }

    /// Stallion names in sorted order
    pub fn stallion_names(&self) -> impl Iterator<Item = &str> {
        self.stallions.keys().map(String::as_str)
    }

    /// Broodmare names in sorted order
    pub fn broodmare_names(&self) -> impl Iterator<Item = &str> {
        self.broodmares.keys().map(String::as_str)
    }

    pub fn n_stallions(&self) -> usize {
        self.stallions.len()
    }

    pub fn n_broodmares(&self) -> usize {
        self.broodmares.len()
    }

    /// Daughter of the named stallion out of `dam`
    pub fn daughter(&self, sire: &str, dam: &BroodmareProfile) -> Result<BroodmareProfile> {
        Ok(BroodmareProfile::daughter(self.stallion(sire)?, dam))
    }
}

impl ProfileLookup for ProfileCatalog {
    fn stallion(&self, name: &str) -> Result<&StallionProfile> {
        self.stallions
            .get(name)
            .ok_or_else(|| BloodlineError::unknown_key("stallion", name))
    }

    fn broodmare(&self, name: &str) -> Result<&BroodmareProfile> {
        self.broodmares
            .get(name)
            .ok_or_else(|| BloodlineError::unknown_key("broodmare", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::profile::AncestorChain;

    #[test]
    fn test_lookup_and_order() {
        let mut catalog = ProfileCatalog::new();
        let chain = AncestorChain::from_raw([0; 16]);
        catalog
            .insert_stallion("Zeta", StallionProfile::new(chain, [0; 8]))
            .unwrap();
        catalog
            .insert_stallion("Alpha", StallionProfile::new(chain, [0; 8]))
            .unwrap();
        catalog
            .insert_broodmare("Mare", BroodmareProfile::new(chain, [0; 4]))
            .unwrap();

        assert_eq!(catalog.stallion_names().collect::<Vec<_>>(), vec!["Alpha", "Zeta"]);
        assert!(catalog.stallion("Alpha").is_ok());
        assert!(matches!(
            catalog.broodmare("Alpha"),
            Err(BloodlineError::UnknownKey { kind: "broodmare", .. })
        ));
        assert!(catalog
            .insert_broodmare("Mare", BroodmareProfile::new(chain, [0; 4]))
            .is_err());
    }
}
