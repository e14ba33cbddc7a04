//! Per-plant reminder generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::interval::effective_interval;
use crate::date::{add_days, calendar_day, month_of};
use crate::plant::{Plant, ScheduledCare};
use crate::species::Species;

/// A derived due date for one plant/action pair.
///
/// Never stored: recompute it whenever plant state or "today" changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reminder {
    pub id: String,
    pub plant_id: String,
    pub action: ScheduledCare,
    pub due_date: NaiveDate,
    /// False while the reminder is due today or overdue.
    pub completed: bool,
}

impl Reminder {
    /// Build a reminder, deriving `completed` from `today`.
    pub fn new(plant_id: &str, action: ScheduledCare, due_date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            id: format!("{}-{}", action.as_str(), plant_id),
            plant_id: plant_id.to_string(),
            action,
            due_date,
            completed: due_date > today,
        }
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && !self.completed
    }
}

/// Next date `care` falls due: last performed (or created) plus the cadence.
pub fn next_due(plant: &Plant, species: &Species, care: ScheduledCare) -> NaiveDate {
    let last = calendar_day(plant.last_performed_or_created(care));
    add_days(last, i64::from(effective_interval(plant, species, care)))
}

/// Reminders for a single plant as of `today`.
///
/// Always yields a water reminder. A fertilize reminder is added only when
/// `today`'s month is one of the species' fertilizing months. Repotting is
/// tracked on the plant but never produces a reminder here.
pub fn reminders_for_plant(plant: &Plant, species: &Species, today: NaiveDate) -> Vec<Reminder> {
    let mut reminders = Vec::with_capacity(2);
    reminders.push(Reminder::new(
        &plant.id,
        ScheduledCare::Water,
        next_due(plant, species, ScheduledCare::Water),
        today,
    ));

    if species.fertilizes_in(month_of(today)) {
        reminders.push(Reminder::new(
            &plant.id,
            ScheduledCare::Fertilize,
            next_due(plant, species, ScheduledCare::Fertilize),
            today,
        ));
    }

    reminders
}
