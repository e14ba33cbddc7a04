//! Apartment management commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use plantcare_core::{Apartment, GardenDb};
use uuid::Uuid;

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum ApartmentAction {
    /// Add an apartment
    Add {
        /// Apartment name
        name: String,
        #[arg(long, default_value = "")]
        address: String,
    },
    /// List apartments
    List,
    /// Delete an apartment with its rooms and plants
    Delete {
        /// Apartment ID
        id: String,
    },
}

pub fn run(action: ApartmentAction) -> CmdResult {
    let db = GardenDb::open()?;

    match action {
        ApartmentAction::Add { name, address } => {
            let apartment = Apartment {
                id: Uuid::new_v4().to_string(),
                name,
                address,
                created_at: Utc::now(),
            };
            db.insert_apartment(&apartment)?;
            print_json(&apartment)?;
        }
        ApartmentAction::List => {
            print_json(&db.list_apartments()?)?;
        }
        ApartmentAction::Delete { id } => {
            if db.delete_apartment(&id)? {
                println!("Apartment deleted: {id}");
            } else {
                return Err(format!("apartment not found: {id}").into());
            }
        }
    }
    Ok(())
}
