//! Vacation task planner.
//!
//! This module projects each plant's care cadence over a trip:
//! - Water on every day the cadence lands on, plus the first day when already overdue
//! - Fertilize on cadence days, if fertilizing is in season when the plan is generated
//! - Mist high-humidity species every few days regardless of watering
//!
//! Fertilize gating looks at a single month (the generation date), so a trip
//! that crosses into another month keeps the first month's decision.

use chrono::NaiveDate;
use uuid::Uuid;

use super::{VacationTask, VacationTaskType};
use crate::care::effective_interval;
use crate::date::{add_days, calendar_day, days_between, month_of};
use crate::error::{Result, ValidationError};
use crate::plant::{Plant, ScheduledCare};
use crate::species::{Humidity, Species, SpeciesTable};

/// Planner configuration
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Mist high-humidity plants on every Nth day of the trip, starting on day 0
    pub mist_every_days: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { mist_every_days: 2 }
    }
}

/// Where a plant's cadence lands relative to the first trip day.
struct Cadence {
    interval: i64,
    days_since: i64,
    first_offset: i64,
}

impl Cadence {
    fn new(plant: &Plant, species: &Species, care: ScheduledCare, start: NaiveDate) -> Self {
        let interval = i64::from(effective_interval(plant, species, care));
        let last = calendar_day(plant.last_performed_or_created(care));
        let days_since = days_between(last, start);
        Self {
            interval,
            days_since,
            first_offset: interval - days_since.rem_euclid(interval),
        }
    }

    fn lands_on(&self, index: i64) -> bool {
        (index + self.first_offset) % self.interval == 0
    }

    fn overdue_at_start(&self) -> bool {
        self.days_since >= self.interval
    }
}

/// Vacation task planner
pub struct VacationPlanner {
    config: PlannerConfig,
}

impl Default for VacationPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl VacationPlanner {
    /// Create a planner with default config
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Generate tasks for every day in `[start, end]`
    ///
    /// # Arguments
    /// * `plants` - Plant collection snapshot
    /// * `species` - Species table used to resolve cadences
    /// * `start` / `end` - First and last day of the trip, inclusive
    /// * `today` - Generation date; its month decides fertilize gating
    ///
    /// # Returns
    /// Tasks sorted by date. Plants with unknown species are skipped.
    ///
    /// # Errors
    /// Returns a validation error if `end` is before `start`.
    pub fn generate_tasks(
        &self,
        plants: &[Plant],
        species: &SpeciesTable,
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> Result<Vec<VacationTask>> {
        if end < start {
            return Err(ValidationError::InvalidDateRange { start, end }.into());
        }
        let last_index = days_between(start, end);
        let fertilize_month = month_of(today);
        let mist_every = i64::from(self.config.mist_every_days.max(1));

        let mut tasks = Vec::new();
        for plant in plants {
            let Some(species) = species.resolve(plant) else {
                tracing::debug!(plant_id = %plant.id, "no species, skipping vacation tasks");
                continue;
            };

            let water = Cadence::new(plant, species, ScheduledCare::Water, start);
            let fertilize = species
                .fertilizes_in(fertilize_month)
                .then(|| Cadence::new(plant, species, ScheduledCare::Fertilize, start));
            let mist = species.humidity == Humidity::High;
            let name = plant.display_name(Some(species));

            for index in 0..=last_index {
                let day = add_days(start, index);

                if water.lands_on(index) || (index == 0 && water.overdue_at_start()) {
                    tasks.push(task(
                        plant,
                        day,
                        VacationTaskType::Water,
                        format!("Water {name} ({})", species.water_amount.label()),
                    ));
                }

                if fertilize.as_ref().is_some_and(|c| c.lands_on(index)) {
                    tasks.push(task(plant, day, VacationTaskType::Fertilize, format!("Fertilize {name}")));
                }

                if mist && index % mist_every == 0 {
                    tasks.push(task(
                        plant,
                        day,
                        VacationTaskType::Mist,
                        format!("Mist {name} (needs high humidity)"),
                    ));
                }
            }
        }

        tasks.sort_by_key(|t| t.task_date);
        tracing::debug!(
            start = %start,
            end = %end,
            plants = plants.len(),
            tasks = tasks.len(),
            "generated vacation tasks"
        );
        Ok(tasks)
    }
}

fn task(plant: &Plant, day: NaiveDate, task_type: VacationTaskType, instructions: String) -> VacationTask {
    VacationTask {
        id: Uuid::new_v4().to_string(),
        plan_id: None,
        plant_id: plant.id.clone(),
        helper_id: None,
        task_date: day,
        task_type,
        instructions,
        completed: false,
    }
}

/// [`VacationPlanner::generate_tasks`] with the default configuration.
pub fn generate_tasks(
    plants: &[Plant],
    species: &SpeciesTable,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<Vec<VacationTask>> {
    VacationPlanner::new().generate_tasks(plants, species, start, end, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{format_day, parse_day, parse_timestamp};

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    fn dates(tasks: &[VacationTask], plant_id: &str, kind: VacationTaskType) -> Vec<String> {
        tasks
            .iter()
            .filter(|t| t.plant_id == plant_id && t.task_type == kind)
            .map(|t| format_day(t.task_date))
            .collect()
    }

    fn pothos(last_watered: Option<&str>) -> Plant {
        // Pothos: water 7, fertilize 30 (Mar-Sep), medium humidity
        let mut p = Plant::new("pothos", "epipremnum-aureum", parse_timestamp("2023-12-20").unwrap());
        p.last_watered = last_watered.map(|s| parse_timestamp(s).unwrap());
        p
    }

    #[test]
    fn water_cadence_over_a_week() {
        let mut plant = pothos(Some("2024-01-01"));
        plant.water_frequency_override = Some(3);
        let tasks = generate_tasks(
            &[plant],
            &SpeciesTable::builtin(),
            day("2024-01-04"),
            day("2024-01-10"),
            day("2024-01-02"),
        )
        .unwrap();
        assert_eq!(
            dates(&tasks, "pothos", VacationTaskType::Water),
            vec!["2024-01-04", "2024-01-07", "2024-01-10"]
        );
        assert!(tasks.iter().all(|t| t.task_type == VacationTaskType::Water));
    }

    #[test]
    fn overdue_plant_is_watered_on_first_day() {
        // Every 4 days, last watered 6 days before start: cadence lands on
        // days 2 and 6, and day 0 is added because watering is overdue.
        let mut plant = pothos(Some("2023-12-29"));
        plant.water_frequency_override = Some(4);
        let tasks = generate_tasks(
            &[plant],
            &SpeciesTable::builtin(),
            day("2024-01-04"),
            day("2024-01-10"),
            day("2024-01-04"),
        )
        .unwrap();
        assert_eq!(
            dates(&tasks, "pothos", VacationTaskType::Water),
            vec!["2024-01-04", "2024-01-06", "2024-01-10"]
        );
    }

    #[test]
    fn not_yet_due_plant_skips_first_day() {
        let mut plant = pothos(Some("2024-01-02"));
        plant.water_frequency_override = Some(4);
        let tasks = generate_tasks(
            &[plant],
            &SpeciesTable::builtin(),
            day("2024-01-04"),
            day("2024-01-10"),
            day("2024-01-03"),
        )
        .unwrap();
        assert_eq!(
            dates(&tasks, "pothos", VacationTaskType::Water),
            vec!["2024-01-06", "2024-01-10"]
        );
    }

    #[test]
    fn cadence_index_follows_days_since_last_watering() {
        // 2 days since watering, every 7: (i + 5) % 7 == 0 picks day index 2.
        let tasks = generate_tasks(
            &[pothos(Some("2024-01-02"))],
            &SpeciesTable::builtin(),
            day("2024-01-04"),
            day("2024-01-10"),
            day("2024-01-03"),
        )
        .unwrap();
        assert_eq!(dates(&tasks, "pothos", VacationTaskType::Water), vec!["2024-01-06"]);
    }

    #[test]
    fn never_watered_uses_created_at() {
        // Created 2023-12-20, every 7 days: 14 days before start.
        let tasks = generate_tasks(
            &[pothos(None)],
            &SpeciesTable::builtin(),
            day("2024-01-03"),
            day("2024-01-10"),
            day("2024-01-03"),
        )
        .unwrap();
        assert_eq!(
            dates(&tasks, "pothos", VacationTaskType::Water),
            vec!["2024-01-03", "2024-01-10"]
        );
    }

    #[test]
    fn fertilize_gated_by_generation_month() {
        let mut plant = pothos(Some("2024-05-30"));
        plant.last_fertilized = Some(parse_timestamp("2024-05-02").unwrap());
        let table = SpeciesTable::builtin();

        let summer = generate_tasks(&[plant.clone()], &table, day("2024-06-01"), day("2024-06-10"), day("2024-05-30")).unwrap();
        assert_eq!(dates(&summer, "pothos", VacationTaskType::Fertilize), vec!["2024-06-01"]);

        // Same trip generated in January: no fertilizing at all.
        let winter = generate_tasks(&[plant], &table, day("2024-06-01"), day("2024-06-10"), day("2024-01-15")).unwrap();
        assert!(dates(&winter, "pothos", VacationTaskType::Fertilize).is_empty());
    }

    #[test]
    fn high_humidity_species_are_misted_every_other_day() {
        let fern = Plant::new("fern", "nephrolepis-exaltata", parse_timestamp("2024-01-01").unwrap());
        let tasks = generate_tasks(&[fern], &SpeciesTable::builtin(), day("2024-01-04"), day("2024-01-09"), day("2024-01-04")).unwrap();
        assert_eq!(
            dates(&tasks, "fern", VacationTaskType::Mist),
            vec!["2024-01-04", "2024-01-06", "2024-01-08"]
        );
        let mist = tasks.iter().find(|t| t.task_type == VacationTaskType::Mist).unwrap();
        assert_eq!(mist.instructions, "Mist Boston Fern (needs high humidity)");
    }

    #[test]
    fn custom_mist_spacing() {
        let fern = Plant::new("fern", "nephrolepis-exaltata", parse_timestamp("2024-01-01").unwrap());
        let planner = VacationPlanner::with_config(PlannerConfig { mist_every_days: 3 });
        let tasks = planner
            .generate_tasks(&[fern], &SpeciesTable::builtin(), day("2024-01-04"), day("2024-01-09"), day("2024-01-04"))
            .unwrap();
        assert_eq!(dates(&tasks, "fern", VacationTaskType::Mist), vec!["2024-01-04", "2024-01-07"]);
    }

    #[test]
    fn output_is_sorted_and_unknown_species_skipped() {
        let mut ghost = pothos(None);
        ghost.id = "ghost".into();
        ghost.species_id = "unknown".into();
        let fern = Plant::new("fern", "nephrolepis-exaltata", parse_timestamp("2024-01-01").unwrap());
        let tasks = generate_tasks(
            &[pothos(Some("2024-01-01")), ghost, fern],
            &SpeciesTable::builtin(),
            day("2024-01-04"),
            day("2024-01-14"),
            day("2024-01-04"),
        )
        .unwrap();
        assert!(!tasks.is_empty());
        assert!(tasks.windows(2).all(|w| w[0].task_date <= w[1].task_date));
        assert!(tasks.iter().all(|t| t.plant_id != "ghost"));
        assert!(tasks.iter().all(|t| t.plan_id.is_none() && !t.completed));
    }

    #[test]
    fn empty_collection_yields_no_tasks() {
        let tasks = generate_tasks(&[], &SpeciesTable::builtin(), day("2024-01-04"), day("2024-01-10"), day("2024-01-04")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn rejects_reversed_range() {
        let result = generate_tasks(&[], &SpeciesTable::builtin(), day("2024-01-10"), day("2024-01-04"), day("2024-01-04"));
        assert!(result.is_err());
    }

    #[test]
    fn water_instructions_mention_volume() {
        let tasks = generate_tasks(
            &[pothos(Some("2023-12-28"))],
            &SpeciesTable::builtin(),
            day("2024-01-04"),
            day("2024-01-04"),
            day("2024-01-04"),
        )
        .unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].instructions, "Water Golden Pothos (moderate water)");
    }
}
