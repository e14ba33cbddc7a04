//! Collection-wide reminder queries.
//!
//! [`all_reminders`] is the single source; the views below only filter its
//! output. For any reminder set and any `today`, [`overdue`], [`due_today`]
//! and [`upcoming`] are pairwise disjoint since they partition by due date
//! (before / equal / after `today`).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::reminder::{reminders_for_plant, Reminder};
use crate::date::add_days;
use crate::plant::Plant;
use crate::species::SpeciesTable;

/// Reminders for every plant with a known species, ascending by due date.
///
/// Plants whose species is missing are skipped. The sort is stable, so
/// reminders sharing a due date keep plant order (water before fertilize).
pub fn all_reminders(plants: &[Plant], species: &SpeciesTable, today: NaiveDate) -> Vec<Reminder> {
    let mut reminders: Vec<Reminder> = plants
        .iter()
        .filter_map(|plant| match species.resolve(plant) {
            Some(s) => Some(reminders_for_plant(plant, s, today)),
            None => {
                tracing::debug!(
                    plant_id = %plant.id,
                    species_id = %plant.species_id,
                    "skipping plant with unknown species"
                );
                None
            }
        })
        .flatten()
        .collect();
    reminders.sort_by_key(|r| r.due_date);
    reminders
}

/// Due strictly before `today` and not completed.
pub fn overdue(reminders: &[Reminder], today: NaiveDate) -> Vec<Reminder> {
    reminders
        .iter()
        .filter(|r| r.is_overdue(today))
        .cloned()
        .collect()
}

/// Due exactly on `today`.
pub fn due_today(reminders: &[Reminder], today: NaiveDate) -> Vec<Reminder> {
    reminders
        .iter()
        .filter(|r| r.due_date == today)
        .cloned()
        .collect()
}

/// Due after `today` and before `today + window_days` (both exclusive).
pub fn upcoming(reminders: &[Reminder], today: NaiveDate, window_days: u32) -> Vec<Reminder> {
    let end = add_days(today, i64::from(window_days));
    reminders
        .iter()
        .filter(|r| r.due_date > today && r.due_date < end)
        .cloned()
        .collect()
}

/// Group reminders by due date for calendar-style lookups.
pub fn reminders_by_date(reminders: &[Reminder]) -> BTreeMap<NaiveDate, Vec<Reminder>> {
    let mut map: BTreeMap<NaiveDate, Vec<Reminder>> = BTreeMap::new();
    for r in reminders {
        map.entry(r.due_date).or_default().push(r.clone());
    }
    map
}

/// The three reminder views for one day, as shown on a care dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct CareOverview {
    pub today: NaiveDate,
    pub window_days: u32,
    pub overdue: Vec<Reminder>,
    pub due_today: Vec<Reminder>,
    pub upcoming: Vec<Reminder>,
}

impl CareOverview {
    pub fn build(plants: &[Plant], species: &SpeciesTable, today: NaiveDate, window_days: u32) -> Self {
        let all = all_reminders(plants, species, today);
        Self {
            today,
            window_days,
            overdue: overdue(&all, today),
            due_today: due_today(&all, today),
            upcoming: upcoming(&all, today, window_days),
        }
    }

    /// Number of reminders needing attention now.
    pub fn attention_count(&self) -> usize {
        self.overdue.len() + self.due_today.len()
    }
}
