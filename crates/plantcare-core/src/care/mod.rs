//! Care scheduling: cadence resolution, reminders and event recording.
//!
//! Everything here is a pure function of plant state, species data and an
//! explicit `today`. Nothing reads the clock.

pub mod aggregate;
pub mod interval;
pub mod recorder;
pub mod reminder;

pub use aggregate::{all_reminders, due_today, overdue, reminders_by_date, upcoming, CareOverview};
pub use interval::{effective_interval, resolve_interval, species_interval};
pub use recorder::{apply_event, record_event};
pub use reminder::{next_due, reminders_for_plant, Reminder};
