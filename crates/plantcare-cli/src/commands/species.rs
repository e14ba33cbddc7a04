//! Species catalog commands for CLI.

use clap::Subcommand;
use plantcare_core::{Config, CoreError, Species};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum SpeciesAction {
    /// List every known species
    List,
    /// Show one species
    Show {
        /// Species ID (e.g. "monstera-deliciosa")
        id: String,
    },
}

pub fn run(action: SpeciesAction) -> CmdResult {
    let table = Config::load()?.species_table()?;

    match action {
        SpeciesAction::List => {
            let species: Vec<&Species> = table.iter().collect();
            print_json(&species)?;
        }
        SpeciesAction::Show { id } => {
            let species = table.get(&id).ok_or(CoreError::NotFound { kind: "Species", id })?;
            print_json(species)?;
        }
    }
    Ok(())
}
