//! # Plantcare Core Library
//!
//! Care scheduling for a personal plant collection. Everything the `plantcare`
//! CLI does goes through this crate.
//!
//! ## Architecture
//!
//! - **Species**: immutable reference data (cadences, fertilizing season, humidity)
//! - **Care**: interval resolution, reminder generation and aggregation, event recording
//! - **Vacation**: forward projection of care over a trip, plans and helpers
//! - **Calendar**: iCalendar and plain-text exports
//! - **Storage**: SQLite garden store and TOML configuration
//!
//! Scheduling functions are pure: they take plant state, species data and an
//! explicit `today`, and never read the clock.
//!
//! ## Key Components
//!
//! - [`SpeciesTable`]: catalog lookup
//! - [`Garden`]: in-memory household snapshot
//! - [`VacationPlanner`]: vacation task generation
//! - [`GardenDb`]: persistence
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod care;
pub mod date;
pub mod error;
pub mod garden;
pub mod home;
pub mod plant;
pub mod species;
pub mod storage;
pub mod vacation;

pub use calendar::{helper_summary, reminder_calendar, vacation_calendar, CalendarOptions};
pub use care::{
    all_reminders, due_today, effective_interval, overdue, record_event, reminders_for_plant, upcoming,
    CareOverview, Reminder,
};
pub use date::Timestamp;
pub use error::{ConfigError, CoreError, DatabaseError, Result, ValidationError};
pub use garden::Garden;
pub use home::{Apartment, Room, WindowDirection};
pub use plant::{CareAction, CareEvent, HealthStatus, Plant, ScheduledCare};
pub use species::{Difficulty, Humidity, LightLevel, Species, SpeciesTable, WaterAmount};
pub use storage::{Config, GardenDb};
pub use vacation::{
    generate_tasks, PlannerConfig, VacationHelper, VacationPlan, VacationPlanner, VacationTask, VacationTaskType,
};
