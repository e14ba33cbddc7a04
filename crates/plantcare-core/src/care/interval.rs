//! Effective care cadence for a plant.

use crate::error::Result;
use crate::plant::{Plant, ScheduledCare};
use crate::species::{Species, SpeciesTable};

/// Days between occurrences of `care` for `plant`.
///
/// A positive per-plant override wins; anything else (absent, zero,
/// negative) falls back to the species default. Never returns 0.
pub fn effective_interval(plant: &Plant, species: &Species, care: ScheduledCare) -> u32 {
    match plant.frequency_override(care) {
        Some(days) if days > 0 => days as u32,
        _ => species_interval(species, care),
    }
}

/// Species default cadence for `care`.
pub fn species_interval(species: &Species, care: ScheduledCare) -> u32 {
    let days = match care {
        ScheduledCare::Water => species.water_frequency_days,
        ScheduledCare::Fertilize => species.fertilize_frequency_days,
    };
    days.max(1)
}

/// [`effective_interval`] with the species looked up in `table`.
///
/// # Errors
/// Returns [`CoreError::UnknownSpecies`](crate::CoreError::UnknownSpecies)
/// if the plant's species is not in the table.
pub fn resolve_interval(plant: &Plant, table: &SpeciesTable, care: ScheduledCare) -> Result<u32> {
    let species = table.require(plant)?;
    Ok(effective_interval(plant, species, care))
}
