//! Calendar and text exports for helpers.
//!
//! Vacation tasks become timed iCalendar events on their task date;
//! reminders become all-day events. The helper summary is a plain-text
//! digest grouped by day, suitable for pasting into an email.

use chrono::{Duration, NaiveTime};
use icalendar::{Calendar, Component, Event, EventLike};

use crate::care::Reminder;
use crate::date::format_day;
use crate::garden::Garden;
use crate::vacation::{VacationHelper, VacationPlan, VacationTaskType};

/// Timing of exported vacation task events.
#[derive(Debug, Clone)]
pub struct CalendarOptions {
    /// Local hour (0-23) each task event starts at.
    pub start_hour: u32,
    pub duration_minutes: i64,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            start_hour: 9,
            duration_minutes: 30,
        }
    }
}

fn task_emoji(kind: VacationTaskType) -> &'static str {
    match kind {
        VacationTaskType::Water => "💧",
        VacationTaskType::Fertilize => "🧪",
        VacationTaskType::Mist => "💨",
    }
}

/// Render every task of `plan` as a floating-time event.
pub fn vacation_calendar(plan: &VacationPlan, garden: &Garden, options: &CalendarOptions) -> String {
    let start_time = NaiveTime::from_hms_opt(options.start_hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    let mut calendar = Calendar::new();
    calendar.name(&format!("Plant care: {}", plan.name));

    for task in &plan.tasks {
        let name = garden.plant_name(&task.plant_id);
        let starts = task.task_date.and_time(start_time);
        let ends = starts + Duration::minutes(options.duration_minutes.max(1));
        let description = if task.instructions.is_empty() {
            format!("Please {}: {name}", task.task_type)
        } else {
            task.instructions.clone()
        };

        let mut event = Event::new();
        event
            .uid(&format!("{}@plantcare", task.id))
            .summary(&format!("🌱 {}: {name}", task.task_type.title()))
            .description(&description)
            .starts(starts)
            .ends(ends);
        if let Some(location) = garden.location_of(&task.plant_id) {
            event.location(location);
        }
        calendar.push(event.done());
    }

    calendar.done().to_string()
}

/// Render reminders as all-day events on their due date.
pub fn reminder_calendar(reminders: &[Reminder], garden: &Garden) -> String {
    let mut calendar = Calendar::new();
    calendar.name("Plant care reminders");

    for reminder in reminders {
        let name = garden.plant_name(&reminder.plant_id);
        let mut event = Event::new();
        event
            .uid(&format!("{}-{}@plantcare", reminder.id, format_day(reminder.due_date)))
            .summary(&format!("🌱 {}: {name}", capitalize(reminder.action.as_str())))
            .all_day(reminder.due_date);
        if let Some(location) = garden.location_of(&reminder.plant_id) {
            event.location(location);
        }
        calendar.push(event.done());
    }

    calendar.done().to_string()
}

/// Plain-text task list for one helper.
///
/// Lists the helper's assigned tasks, or the whole plan if nothing has been
/// assigned to them yet.
pub fn helper_summary(helper: &VacationHelper, owner_name: &str, plan: &VacationPlan, garden: &Garden) -> String {
    let assigned = plan.tasks_for_helper(&helper.id);
    let tasks: Vec<_> = if assigned.is_empty() {
        plan.tasks.iter().collect()
    } else {
        assigned
    };

    let mut body = format!("Hi {},\n\n", helper.name);
    body.push_str(&format!("{owner_name} asked you to look after the plants.\n"));
    body.push_str(&format!(
        "Period: {} to {}\n\n",
        plan.start_date.format("%d %B %Y"),
        plan.end_date.format("%d %B %Y")
    ));
    body.push_str("=== CARE PLAN ===\n\n");

    let mut current = None;
    for task in tasks {
        if current != Some(task.task_date) {
            if current.is_some() {
                body.push('\n');
            }
            body.push_str(&format!("📅 {}\n", task.task_date.format("%A, %d %B")));
            current = Some(task.task_date);
        }
        body.push_str(&format!(
            "  {} {}",
            task_emoji(task.task_type),
            garden.plant_name(&task.plant_id)
        ));
        if !task.instructions.is_empty() {
            body.push_str(" - ");
            body.push_str(&task.instructions);
        }
        body.push('\n');
    }

    body.push_str("\nThank you for your help! 🌿\n");
    body
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
