//! Reminder views for CLI.

use clap::{Args, ValueEnum};
use plantcare_core::care::{due_today, overdue, upcoming};
use plantcare_core::reminder_calendar;

use super::{open_garden, print_json, resolve_today, CmdResult};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum View {
    /// Overdue, due today and upcoming side by side
    #[default]
    Overview,
    /// Every reminder, ascending by due date
    All,
    Overdue,
    Today,
    Upcoming,
}

#[derive(Args)]
pub struct RemindersArgs {
    /// Reference date (yyyy-MM-dd); defaults to the local date
    #[arg(long)]
    today: Option<String>,
    /// Days ahead for the upcoming view; defaults to the configured window
    #[arg(long)]
    window: Option<u32>,
    #[arg(long, value_enum, default_value_t = View::Overview)]
    view: View,
    /// Print an iCalendar file instead of JSON
    #[arg(long)]
    ics: bool,
}

pub fn run(args: RemindersArgs) -> CmdResult {
    let (config, _db, garden) = open_garden()?;
    let today = resolve_today(args.today.as_deref())?;
    let window = args.window.unwrap_or(config.reminders.upcoming_window_days);
    let all = garden.reminders(today);

    let selected = match args.view {
        View::Overview => {
            let overview = garden.overview(today, window);
            if !args.ics {
                return print_json(&overview);
            }
            let mut merged = overview.overdue;
            merged.extend(overview.due_today);
            merged.extend(overview.upcoming);
            merged
        }
        View::All => all,
        View::Overdue => overdue(&all, today),
        View::Today => due_today(&all, today),
        View::Upcoming => upcoming(&all, today, window),
    };

    if args.ics {
        print!("{}", reminder_calendar(&selected, &garden));
        Ok(())
    } else {
        print_json(&selected)
    }
}
