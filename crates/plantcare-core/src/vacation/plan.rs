//! Vacation plans, helpers and task assignment.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::VacationTask;
use crate::error::{CoreError, Result, ValidationError};

/// Someone looking after the plants while the owner is away.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VacationHelper {
    pub id: String,
    pub name: String,
    pub email: String,
    pub invited_at: DateTime<Utc>,
}

/// A named absence window with its generated tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VacationPlan {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub helpers: Vec<VacationHelper>,
    #[serde(default)]
    pub tasks: Vec<VacationTask>,
}

impl VacationPlan {
    /// Create a plan and attach `tasks` to it.
    ///
    /// # Errors
    /// Fails if the name is blank or `end_date` is not after `start_date`.
    pub fn create(
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        notes: &str,
        created_at: DateTime<Utc>,
        tasks: Vec<VacationTask>,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".into()).into());
        }
        if end_date <= start_date {
            return Err(ValidationError::InvalidDateRange {
                start: start_date,
                end: end_date,
            }
            .into());
        }

        let id = Uuid::new_v4().to_string();
        let tasks = tasks
            .into_iter()
            .map(|mut t| {
                t.plan_id = Some(id.clone());
                t
            })
            .collect();

        Ok(Self {
            id,
            name: name.to_string(),
            start_date,
            end_date,
            notes: notes.trim().to_string(),
            created_at,
            helpers: Vec::new(),
            tasks,
        })
    }

    /// Invite a helper.
    pub fn add_helper(&mut self, name: &str, email: &str, invited_at: DateTime<Utc>) -> Result<&VacationHelper> {
        let (name, email) = (name.trim(), email.trim());
        if name.is_empty() {
            return Err(ValidationError::MissingField("helper name".into()).into());
        }
        if email.is_empty() {
            return Err(ValidationError::MissingField("helper email".into()).into());
        }
        self.helpers.push(VacationHelper {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            invited_at,
        });
        Ok(&self.helpers[self.helpers.len() - 1])
    }

    /// Remove a helper and unassign their tasks.
    pub fn remove_helper(&mut self, helper_id: &str) -> Result<VacationHelper> {
        let pos = self
            .helpers
            .iter()
            .position(|h| h.id == helper_id)
            .ok_or_else(|| not_found("Helper", helper_id))?;
        let helper = self.helpers.remove(pos);
        for task in self.tasks.iter_mut().filter(|t| t.helper_id.as_deref() == Some(helper_id)) {
            task.helper_id = None;
        }
        Ok(helper)
    }

    pub fn helper(&self, helper_id: &str) -> Option<&VacationHelper> {
        self.helpers.iter().find(|h| h.id == helper_id)
    }

    /// Assign a task to a helper, or clear the assignment with `None`.
    pub fn assign(&mut self, task_id: &str, helper_id: Option<&str>) -> Result<()> {
        if let Some(hid) = helper_id {
            if self.helper(hid).is_none() {
                return Err(not_found("Helper", hid));
            }
        }
        let task = self.task_mut(task_id)?;
        task.helper_id = helper_id.map(str::to_string);
        Ok(())
    }

    /// Spread tasks over helpers round-robin, in task order.
    pub fn auto_assign(&mut self) -> Result<()> {
        if self.helpers.is_empty() {
            return Err(ValidationError::EmptyCollection("vacation helpers".into()).into());
        }
        let helper_ids: Vec<String> = self.helpers.iter().map(|h| h.id.clone()).collect();
        for (i, task) in self.tasks.iter_mut().enumerate() {
            task.helper_id = Some(helper_ids[i % helper_ids.len()].clone());
        }
        Ok(())
    }

    /// Flip a task's completion flag, returning the new value.
    pub fn toggle_completed(&mut self, task_id: &str) -> Result<bool> {
        let task = self.task_mut(task_id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// (completed, total)
    pub fn progress(&self) -> (usize, usize) {
        let done = self.tasks.iter().filter(|t| t.completed).count();
        (done, self.tasks.len())
    }

    pub fn tasks_for_helper(&self, helper_id: &str) -> Vec<&VacationTask> {
        self.tasks
            .iter()
            .filter(|t| t.helper_id.as_deref() == Some(helper_id))
            .collect()
    }

    pub fn tasks_by_date(&self) -> BTreeMap<NaiveDate, Vec<&VacationTask>> {
        let mut map: BTreeMap<NaiveDate, Vec<&VacationTask>> = BTreeMap::new();
        for task in &self.tasks {
            map.entry(task.task_date).or_default().push(task);
        }
        map
    }

    fn task_mut(&mut self, task_id: &str) -> Result<&mut VacationTask> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| not_found("Task", task_id))
    }
}

fn not_found(kind: &'static str, id: &str) -> CoreError {
    CoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}
