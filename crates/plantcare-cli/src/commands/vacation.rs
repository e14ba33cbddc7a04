//! Vacation plan commands for CLI.

use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use plantcare_core::{
    date, helper_summary, vacation_calendar, CoreError, VacationPlan, VacationPlanner,
};
use serde_json::json;

use super::{open_garden, print_json, resolve_today, CmdResult};

#[derive(Subcommand)]
pub enum VacationAction {
    /// Plan care for a trip and store the generated tasks
    Create {
        /// Plan name
        name: String,
        /// First day away (yyyy-MM-dd)
        start: String,
        /// Last day away (yyyy-MM-dd)
        end: String,
        #[arg(long, default_value = "")]
        notes: String,
        /// Planning date; its month decides whether fertilizing is in season
        #[arg(long)]
        today: Option<String>,
    },
    /// List plans
    List,
    /// Show a plan with its helpers and tasks
    Show {
        /// Plan ID
        id: String,
    },
    /// Delete a plan
    Delete {
        /// Plan ID
        id: String,
    },
    /// Invite a helper to a plan
    AddHelper {
        /// Plan ID
        plan_id: String,
        name: String,
        email: String,
    },
    /// Remove a helper; their tasks become unassigned
    RemoveHelper {
        /// Plan ID
        plan_id: String,
        /// Helper ID
        helper_id: String,
    },
    /// Assign a task to a helper, or unassign it when --helper is omitted
    Assign {
        /// Plan ID
        plan_id: String,
        /// Task ID
        task_id: String,
        #[arg(long)]
        helper: Option<String>,
    },
    /// Spread all tasks over the plan's helpers
    AutoAssign {
        /// Plan ID
        plan_id: String,
    },
    /// Mark a task done, or not done again
    Toggle {
        /// Plan ID
        plan_id: String,
        /// Task ID
        task_id: String,
    },
    /// Export the plan as an iCalendar file
    Export {
        /// Plan ID
        plan_id: String,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Plain-text task list for a helper
    Summary {
        /// Plan ID
        plan_id: String,
        /// Helper ID
        helper_id: String,
    },
}

pub fn run(action: VacationAction) -> CmdResult {
    let (config, db, garden) = open_garden()?;

    match action {
        VacationAction::Create {
            name,
            start,
            end,
            notes,
            today,
        } => {
            let start = date::parse_day(&start)?;
            let end = date::parse_day(&end)?;
            let today = resolve_today(today.as_deref())?;
            let planner = VacationPlanner::with_config(config.planner_config());
            let tasks = garden.vacation_tasks(&planner, start, end, today)?;
            let plan = VacationPlan::create(&name, start, end, &notes, Utc::now(), tasks)?;
            db.save_plan(&plan)?;
            print_json(&plan)?;
        }
        VacationAction::List => {
            let plans: Vec<_> = db
                .list_plans()?
                .into_iter()
                .map(|p| {
                    let (done, total) = p.progress();
                    json!({
                        "id": p.id,
                        "name": p.name,
                        "start_date": p.start_date,
                        "end_date": p.end_date,
                        "helpers": p.helpers.len(),
                        "completed_tasks": done,
                        "total_tasks": total,
                    })
                })
                .collect();
            print_json(&plans)?;
        }
        VacationAction::Show { id } => {
            print_json(&db.require_plan(&id)?)?;
        }
        VacationAction::Delete { id } => {
            if !db.delete_plan(&id)? {
                return Err(CoreError::NotFound {
                    kind: "Vacation plan",
                    id,
                }
                .into());
            }
            println!("Vacation plan deleted: {id}");
        }
        VacationAction::AddHelper { plan_id, name, email } => {
            let mut plan = db.require_plan(&plan_id)?;
            let helper = plan.add_helper(&name, &email, Utc::now())?.clone();
            db.save_plan(&plan)?;
            print_json(&helper)?;
        }
        VacationAction::RemoveHelper { plan_id, helper_id } => {
            let mut plan = db.require_plan(&plan_id)?;
            let helper = plan.remove_helper(&helper_id)?;
            db.save_plan(&plan)?;
            println!("Helper removed: {}", helper.name);
        }
        VacationAction::Assign {
            plan_id,
            task_id,
            helper,
        } => {
            let mut plan = db.require_plan(&plan_id)?;
            plan.assign(&task_id, helper.as_deref())?;
            db.save_plan(&plan)?;
            println!("ok");
        }
        VacationAction::AutoAssign { plan_id } => {
            let mut plan = db.require_plan(&plan_id)?;
            plan.auto_assign()?;
            db.save_plan(&plan)?;
            print_json(&plan.tasks)?;
        }
        VacationAction::Toggle { plan_id, task_id } => {
            let mut plan = db.require_plan(&plan_id)?;
            let completed = plan.toggle_completed(&task_id)?;
            db.save_plan(&plan)?;
            let (done, total) = plan.progress();
            print_json(&json!({
                "task_id": task_id,
                "completed": completed,
                "progress": format!("{done}/{total}"),
            }))?;
        }
        VacationAction::Export { plan_id, output } => {
            let plan = db.require_plan(&plan_id)?;
            let ics = vacation_calendar(&plan, &garden, &config.calendar_options());
            match output {
                Some(path) => {
                    std::fs::write(&path, ics)?;
                    println!("Calendar written: {}", path.display());
                }
                None => print!("{ics}"),
            }
        }
        VacationAction::Summary { plan_id, helper_id } => {
            let plan = db.require_plan(&plan_id)?;
            let helper = plan.helper(&helper_id).ok_or_else(|| CoreError::NotFound {
                kind: "Helper",
                id: helper_id.clone(),
            })?;
            print!("{}", helper_summary(helper, &config.vacation.owner_name, &plan, &garden));
        }
    }
    Ok(())
}
