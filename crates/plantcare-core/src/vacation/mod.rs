//! Vacation coverage: dated care tasks for someone looking after the plants.
//!
//! - [`VacationPlanner`] expands each plant's cadence over a trip into tasks
//! - [`VacationPlan`] owns the generated tasks and the helpers doing them

pub mod plan;
pub mod planner;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use plan::{VacationHelper, VacationPlan};
pub use planner::{generate_tasks, PlannerConfig, VacationPlanner};

/// Kind of care a vacation task asks for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VacationTaskType {
    Water,
    Fertilize,
    Mist,
}

impl VacationTaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VacationTaskType::Water => "water",
            VacationTaskType::Fertilize => "fertilize",
            VacationTaskType::Mist => "mist",
        }
    }

    /// Capitalized verb for calendar titles.
    pub fn title(&self) -> &'static str {
        match self {
            VacationTaskType::Water => "Water",
            VacationTaskType::Fertilize => "Fertilize",
            VacationTaskType::Mist => "Mist",
        }
    }
}

impl fmt::Display for VacationTaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dated care task within a vacation plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VacationTask {
    pub id: String,
    /// Set once the task is attached to a plan.
    #[serde(default)]
    pub plan_id: Option<String>,
    pub plant_id: String,
    #[serde(default)]
    pub helper_id: Option<String>,
    pub task_date: NaiveDate,
    pub task_type: VacationTaskType,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub completed: bool,
}
