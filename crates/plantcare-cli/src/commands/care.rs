//! Care logging commands for CLI.

use chrono::Local;
use clap::Subcommand;
use plantcare_core::{date, CareAction, GardenDb};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum CareCommand {
    /// Record care performed on a plant
    Log {
        /// Plant ID
        plant_id: String,
        /// water, fertilize, repot, prune, mist or rotate
        action: String,
        /// When it happened (yyyy-MM-dd or RFC 3339); defaults to now in the local offset
        #[arg(long)]
        at: Option<String>,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Care history of a plant, oldest first
    History {
        /// Plant ID
        plant_id: String,
    },
}

pub fn run(action: CareCommand) -> CmdResult {
    let db = GardenDb::open()?;

    match action {
        CareCommand::Log {
            plant_id,
            action,
            at,
            note,
        } => {
            let action: CareAction = action.parse()?;
            let performed_at = match at.as_deref() {
                Some(s) => date::parse_timestamp(s)?,
                None => Local::now().fixed_offset(),
            };
            let (event, _plant) = db.record_event(&plant_id, action, performed_at, &note)?;
            print_json(&event)?;
        }
        CareCommand::History { plant_id } => {
            if db.get_plant(&plant_id)?.is_none() {
                return Err(format!("plant not found: {plant_id}").into());
            }
            print_json(&db.list_events(Some(&plant_id))?)?;
        }
    }
    Ok(())
}
