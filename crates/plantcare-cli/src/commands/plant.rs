//! Plant management commands for CLI.

use chrono::Local;
use clap::Subcommand;
use plantcare_core::care::reminders_for_plant;
use plantcare_core::{CoreError, HealthStatus, Plant};
use serde_json::json;
use uuid::Uuid;

use super::{open_garden, print_json, resolve_today, CmdResult};

#[derive(Subcommand)]
pub enum PlantAction {
    /// Add a plant to the collection
    Add {
        /// Species ID (see `plantcare species list`)
        species: String,
        #[arg(long, default_value = "")]
        nickname: String,
        /// Room ID
        #[arg(long)]
        room: Option<String>,
        /// Water every N days instead of the species default
        #[arg(long)]
        water_every: Option<i32>,
        /// Fertilize every N days instead of the species default
        #[arg(long)]
        fertilize_every: Option<i32>,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List plants
    List,
    /// Show a plant with its species, reminders and care log
    Show {
        /// Plant ID
        id: String,
        /// Reference date for reminders (yyyy-MM-dd)
        #[arg(long)]
        today: Option<String>,
    },
    /// Update a plant; a cadence of 0 restores the species default
    Update {
        /// Plant ID
        id: String,
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        room: Option<String>,
        #[arg(long)]
        water_every: Option<i32>,
        #[arg(long)]
        fertilize_every: Option<i32>,
        #[arg(long)]
        notes: Option<String>,
        /// thriving, good, fair or poor
        #[arg(long)]
        health: Option<String>,
    },
    /// Delete a plant and its care log
    Delete {
        /// Plant ID
        id: String,
    },
}

fn positive(days: Option<i32>) -> Option<i32> {
    days.filter(|d| *d > 0)
}

pub fn run(action: PlantAction) -> CmdResult {
    let (_config, db, garden) = open_garden()?;

    match action {
        PlantAction::Add {
            species,
            nickname,
            room,
            water_every,
            fertilize_every,
            notes,
        } => {
            if garden.species().get(&species).is_none() {
                return Err(CoreError::NotFound {
                    kind: "Species",
                    id: species,
                }
                .into());
            }
            let mut plant = Plant::new(Uuid::new_v4().to_string(), species, Local::now().fixed_offset());
            plant.nickname = nickname;
            plant.room_id = room;
            plant.water_frequency_override = positive(water_every);
            plant.fertilize_frequency_override = positive(fertilize_every);
            plant.notes = notes;
            db.insert_plant(&plant)?;
            print_json(&plant)?;
        }
        PlantAction::List => {
            let plants: Vec<_> = garden
                .plants()
                .iter()
                .map(|p| {
                    json!({
                        "id": p.id,
                        "name": garden.plant_name(&p.id),
                        "species_id": p.species_id,
                        "room_id": p.room_id,
                        "health_status": p.health_status,
                    })
                })
                .collect();
            print_json(&plants)?;
        }
        PlantAction::Show { id, today } => {
            let today = resolve_today(today.as_deref())?;
            let plant = garden.plant(&id).ok_or_else(|| CoreError::PlantNotFound(id.clone()))?;
            let species = garden.species_of(plant);
            let reminders = species
                .map(|s| reminders_for_plant(plant, s, today))
                .unwrap_or_default();
            print_json(&json!({
                "plant": plant,
                "name": garden.plant_name(&plant.id),
                "species": species,
                "location": garden.location_of(&plant.id),
                "reminders": reminders,
                "history": garden.events_for(&plant.id),
            }))?;
        }
        PlantAction::Update {
            id,
            nickname,
            room,
            water_every,
            fertilize_every,
            notes,
            health,
        } => {
            let mut plant = garden
                .plant(&id)
                .cloned()
                .ok_or(CoreError::PlantNotFound(id))?;
            if let Some(nickname) = nickname {
                plant.nickname = nickname;
            }
            if let Some(room) = room {
                plant.room_id = Some(room).filter(|r| !r.is_empty());
            }
            if water_every.is_some() {
                plant.water_frequency_override = positive(water_every);
            }
            if fertilize_every.is_some() {
                plant.fertilize_frequency_override = positive(fertilize_every);
            }
            if let Some(notes) = notes {
                plant.notes = notes;
            }
            if let Some(health) = health {
                plant.health_status = health.parse::<HealthStatus>()?;
            }
            db.update_plant(&plant)?;
            print_json(&plant)?;
        }
        PlantAction::Delete { id } => {
            if db.delete_plant(&id)? {
                println!("Plant deleted: {id}");
            } else {
                return Err(CoreError::PlantNotFound(id).into());
            }
        }
    }
    Ok(())
}
