//! Species reference data.
//!
//! A [`SpeciesTable`] is loaded once (built-in catalog, optionally merged with
//! a TOML species file) and treated as immutable afterwards. Plants reference
//! species by id; a plant whose id is missing from the table has nothing to
//! schedule.

mod catalog;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreError, Result, ValidationError};
use crate::plant::Plant;

/// How much water a species takes per watering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WaterAmount {
    Little,
    Moderate,
    Much,
}

impl WaterAmount {
    pub fn label(&self) -> &'static str {
        match self {
            WaterAmount::Little => "a little water",
            WaterAmount::Moderate => "moderate water",
            WaterAmount::Much => "plenty of water",
        }
    }
}

/// Ambient humidity a species prefers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Humidity {
    Low,
    Medium,
    High,
}

/// Light requirement, shared with rooms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LightLevel {
    Low,
    Medium,
    Bright,
    Direct,
}

impl LightLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightLevel::Low => "low",
            LightLevel::Medium => "medium",
            LightLevel::Bright => "bright",
            LightLevel::Direct => "direct",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(LightLevel::Low),
            "medium" => Some(LightLevel::Medium),
            "bright" => Some(LightLevel::Bright),
            "direct" => Some(LightLevel::Direct),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Immutable care profile of a plant species.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Species {
    pub id: String,
    pub common_name: String,
    pub botanical_name: String,
    #[serde(default)]
    pub family: String,
    pub difficulty: Difficulty,
    pub light: LightLevel,
    pub water_frequency_days: u32,
    pub water_amount: WaterAmount,
    pub humidity: Humidity,
    pub fertilize_frequency_days: u32,
    /// Months (1-12) in which fertilizing is active.
    pub fertilize_months: Vec<u8>,
    #[serde(default)]
    pub repot_frequency_years: u32,
    #[serde(default)]
    pub toxic_pets: bool,
    #[serde(default)]
    pub care_tips: Vec<String>,
}

impl Species {
    /// Whether fertilizing is in season during `month` (1-12).
    pub fn fertilizes_in(&self, month: u8) -> bool {
        self.fertilize_months.contains(&month)
    }

    /// Check the invariants the scheduler relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("species.id".into()));
        }
        if self.water_frequency_days == 0 {
            return Err(ValidationError::InvalidValue {
                field: format!("{}.water_frequency_days", self.id),
                message: "must be at least 1 day".into(),
            });
        }
        if self.fertilize_frequency_days == 0 {
            return Err(ValidationError::InvalidValue {
                field: format!("{}.fertilize_frequency_days", self.id),
                message: "must be at least 1 day".into(),
            });
        }
        if let Some(bad) = self.fertilize_months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(ValidationError::InvalidValue {
                field: format!("{}.fertilize_months", self.id),
                message: format!("month {bad} is outside 1-12"),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SpeciesFile {
    #[serde(default)]
    species: Vec<Species>,
}

/// Lookup table from species id to [`Species`].
#[derive(Debug, Clone, Default)]
pub struct SpeciesTable {
    by_id: BTreeMap<String, Species>,
}

impl SpeciesTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the built-in catalog.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for species in catalog::builtin_species() {
            table.by_id.insert(species.id.clone(), species);
        }
        table
    }

    /// Build a table from already-validated entries.
    pub fn from_species(species: impl IntoIterator<Item = Species>) -> Result<Self> {
        let mut table = Self::new();
        table.extend(species)?;
        Ok(table)
    }

    /// Insert or replace entries, validating each.
    pub fn extend(&mut self, species: impl IntoIterator<Item = Species>) -> Result<()> {
        for s in species {
            s.validate()?;
            self.by_id.insert(s.id.clone(), s);
        }
        Ok(())
    }

    /// Parse `[[species]]` entries from TOML text.
    pub fn parse_toml(content: &str) -> Result<Vec<Species>> {
        let file: SpeciesFile = toml::from_str(content).map_err(|e| {
            CoreError::Validation(ValidationError::InvalidValue {
                field: "species file".into(),
                message: e.to_string(),
            })
        })?;
        Ok(file.species)
    }

    /// Merge a TOML species file over the current entries.
    pub fn merge_file(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let species = Self::parse_toml(&content)?;
        let count = species.len();
        self.extend(species)?;
        tracing::info!(path = %path.display(), count, "merged species file");
        Ok(count)
    }

    pub fn get(&self, id: &str) -> Option<&Species> {
        self.by_id.get(id)
    }

    /// Species of `plant`, if the catalog knows it.
    pub fn resolve(&self, plant: &Plant) -> Option<&Species> {
        self.get(&plant.species_id)
    }

    /// Like [`resolve`](Self::resolve), but reports the missing id.
    pub fn require(&self, plant: &Plant) -> Result<&Species> {
        self.resolve(plant).ok_or_else(|| CoreError::UnknownSpecies {
            plant_id: plant.id.clone(),
            species_id: plant.species_id.clone(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
