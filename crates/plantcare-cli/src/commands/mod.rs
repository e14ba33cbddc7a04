pub mod apartment;
pub mod care;
pub mod config;
pub mod plant;
pub mod reminders;
pub mod room;
pub mod species;
pub mod vacation;

use chrono::{Local, NaiveDate};
use plantcare_core::{date, Config, CoreError, Garden, GardenDb};
use serde::Serialize;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// `--today` if given, else the local calendar date.
pub fn resolve_today(arg: Option<&str>) -> Result<NaiveDate, CoreError> {
    match arg {
        Some(s) => date::parse_day(s),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Config, store and a garden snapshot loaded from it.
pub fn open_garden() -> Result<(Config, GardenDb, Garden), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = GardenDb::open()?;
    let garden = db.load_garden(config.species_table()?)?;
    tracing::debug!(plants = garden.plants().len(), "loaded garden");
    Ok((config, db, garden))
}
