//! In-memory household: apartments, rooms, plants and the care log.
//!
//! Queries borrow the garden immutably and therefore see one consistent
//! snapshot. [`Garden::record_event`] needs `&mut self`, and updates the
//! plant and the log together, so a half-applied event is never visible.

use chrono::NaiveDate;

use crate::care::{self, CareOverview, Reminder};
use crate::date::Timestamp;
use crate::error::{CoreError, Result};
use crate::home::{Apartment, Room};
use crate::plant::{CareAction, CareEvent, Plant};
use crate::species::{Species, SpeciesTable};
use crate::vacation::{VacationPlanner, VacationTask};

#[derive(Debug, Clone, Default)]
pub struct Garden {
    species: SpeciesTable,
    apartments: Vec<Apartment>,
    rooms: Vec<Room>,
    plants: Vec<Plant>,
    events: Vec<CareEvent>,
}

impl Garden {
    pub fn new(species: SpeciesTable) -> Self {
        Self {
            species,
            ..Self::default()
        }
    }

    /// Assemble a garden from stored records.
    pub fn from_parts(
        species: SpeciesTable,
        apartments: Vec<Apartment>,
        rooms: Vec<Room>,
        plants: Vec<Plant>,
        events: Vec<CareEvent>,
    ) -> Self {
        Self {
            species,
            apartments,
            rooms,
            plants,
            events,
        }
    }

    pub fn species(&self) -> &SpeciesTable {
        &self.species
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn events(&self) -> &[CareEvent] {
        &self.events
    }

    pub fn plant(&self, id: &str) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn species_of(&self, plant: &Plant) -> Option<&Species> {
        self.species.resolve(plant)
    }

    pub fn add_plant(&mut self, plant: Plant) {
        self.plants.push(plant);
    }

    /// Name to show for a plant id; falls back to the id itself.
    pub fn plant_name<'a>(&'a self, plant_id: &'a str) -> &'a str {
        match self.plant(plant_id) {
            Some(p) => p.display_name(self.species_of(p)),
            None => plant_id,
        }
    }

    /// Apartment name for the room a plant stands in.
    pub fn location_of(&self, plant_id: &str) -> Option<&str> {
        let room_id = self.plant(plant_id)?.room_id.as_deref()?;
        let room = self.rooms.iter().find(|r| r.id == room_id)?;
        self.apartments
            .iter()
            .find(|a| a.id == room.apartment_id)
            .map(|a| a.name.as_str())
    }

    /// Care log for one plant, oldest first.
    pub fn events_for(&self, plant_id: &str) -> Vec<&CareEvent> {
        let mut events: Vec<&CareEvent> = self.events.iter().filter(|e| e.plant_id == plant_id).collect();
        events.sort_by_key(|e| e.performed_at);
        events
    }

    /// Record care on a plant in the collection.
    ///
    /// # Errors
    /// Returns [`CoreError::PlantNotFound`] if `plant_id` is unknown; nothing
    /// is logged and no plant changes in that case.
    pub fn record_event(
        &mut self,
        plant_id: &str,
        action: CareAction,
        performed_at: Timestamp,
        notes: &str,
    ) -> Result<(CareEvent, Plant)> {
        let slot = self
            .plants
            .iter_mut()
            .find(|p| p.id == plant_id)
            .ok_or_else(|| CoreError::PlantNotFound(plant_id.to_string()))?;
        let (event, updated) = care::record_event(slot, action, performed_at, notes);
        *slot = updated.clone();
        self.events.push(event.clone());
        tracing::info!(plant_id, action = %action, "recorded care event");
        Ok((event, updated))
    }

    /// Mark a reminder as done by recording its action now.
    pub fn complete_reminder(&mut self, reminder: &Reminder, performed_at: Timestamp) -> Result<(CareEvent, Plant)> {
        self.record_event(&reminder.plant_id, reminder.action.into(), performed_at, "")
    }

    pub fn reminders(&self, today: NaiveDate) -> Vec<Reminder> {
        care::all_reminders(&self.plants, &self.species, today)
    }

    pub fn overview(&self, today: NaiveDate, window_days: u32) -> CareOverview {
        CareOverview::build(&self.plants, &self.species, today, window_days)
    }

    pub fn vacation_tasks(
        &self,
        planner: &VacationPlanner,
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> Result<Vec<VacationTask>> {
        planner.generate_tasks(&self.plants, &self.species, start, end, today)
    }
}
