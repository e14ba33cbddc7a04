//! Room management commands for CLI.

use clap::Subcommand;
use plantcare_core::{GardenDb, LightLevel, Room, WindowDirection};
use uuid::Uuid;

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum RoomAction {
    /// Add a room to an apartment
    Add {
        /// Apartment ID
        apartment_id: String,
        /// Room name
        name: String,
        /// Light level: low, medium, bright or direct
        #[arg(long, default_value = "medium")]
        light: String,
        /// Window direction: north, east, south, west or none
        #[arg(long, default_value = "none")]
        window: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List rooms
    List {
        /// Only rooms of this apartment
        #[arg(long)]
        apartment: Option<String>,
    },
    /// Delete a room and the plants in it
    Delete {
        /// Room ID
        id: String,
    },
}

pub fn run(action: RoomAction) -> CmdResult {
    let db = GardenDb::open()?;

    match action {
        RoomAction::Add {
            apartment_id,
            name,
            light,
            window,
            notes,
        } => {
            let light_level = LightLevel::parse(&light).ok_or_else(|| format!("unknown light level: {light}"))?;
            let window_direction: WindowDirection = window.parse()?;
            let room = Room {
                id: Uuid::new_v4().to_string(),
                apartment_id,
                name,
                light_level,
                window_direction,
                notes,
            };
            db.insert_room(&room)?;
            print_json(&room)?;
        }
        RoomAction::List { apartment } => {
            print_json(&db.list_rooms(apartment.as_deref())?)?;
        }
        RoomAction::Delete { id } => {
            if db.delete_room(&id)? {
                println!("Room deleted: {id}");
            } else {
                return Err(format!("room not found: {id}").into());
            }
        }
    }
    Ok(())
}
