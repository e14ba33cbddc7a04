//! Plants in the user's collection and the care actions performed on them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::date::Timestamp;
use crate::species::Species;

/// Overall condition as judged by the owner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Thriving,
    #[default]
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Thriving => "thriving",
            HealthStatus::Good => "good",
            HealthStatus::Fair => "fair",
            HealthStatus::Poor => "poor",
        }
    }
}

impl FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thriving" => Ok(HealthStatus::Thriving),
            "good" => Ok(HealthStatus::Good),
            "fair" => Ok(HealthStatus::Fair),
            "poor" => Ok(HealthStatus::Poor),
            other => Err(format!("unknown health status: {other}")),
        }
    }
}

/// A plant owned by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plant {
    pub id: String,
    pub species_id: String,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub nickname: String,
    pub last_watered: Option<Timestamp>,
    pub last_fertilized: Option<Timestamp>,
    #[serde(default)]
    pub last_repotted: Option<Timestamp>,
    /// Days between waterings; replaces the species default when positive.
    #[serde(default)]
    pub water_frequency_override: Option<i32>,
    /// Days between fertilizings; replaces the species default when positive.
    #[serde(default)]
    pub fertilize_frequency_override: Option<i32>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub health_status: HealthStatus,
    pub created_at: Timestamp,
}

impl Plant {
    /// A never-cared-for plant created at `created_at`.
    pub fn new(id: impl Into<String>, species_id: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            species_id: species_id.into(),
            room_id: None,
            nickname: String::new(),
            last_watered: None,
            last_fertilized: None,
            last_repotted: None,
            water_frequency_override: None,
            fertilize_frequency_override: None,
            notes: String::new(),
            health_status: HealthStatus::default(),
            created_at,
        }
    }

    /// Nickname, or the species' common name when the plant has none.
    pub fn display_name<'a>(&'a self, species: Option<&'a Species>) -> &'a str {
        if !self.nickname.trim().is_empty() {
            return &self.nickname;
        }
        species.map(|s| s.common_name.as_str()).unwrap_or("Plant")
    }

    /// Timestamp of the last time `care` was performed, if ever.
    pub fn last_performed(&self, care: ScheduledCare) -> Option<Timestamp> {
        match care {
            ScheduledCare::Water => self.last_watered,
            ScheduledCare::Fertilize => self.last_fertilized,
        }
    }

    /// Last performed, falling back to the creation time.
    pub fn last_performed_or_created(&self, care: ScheduledCare) -> Timestamp {
        self.last_performed(care).unwrap_or(self.created_at)
    }

    pub fn frequency_override(&self, care: ScheduledCare) -> Option<i32> {
        match care {
            ScheduledCare::Water => self.water_frequency_override,
            ScheduledCare::Fertilize => self.fertilize_frequency_override,
        }
    }
}

/// Care actions that recur on a cadence and produce reminders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ScheduledCare {
    Water,
    Fertilize,
}

impl ScheduledCare {
    pub const ALL: [ScheduledCare; 2] = [ScheduledCare::Water, ScheduledCare::Fertilize];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduledCare::Water => "water",
            ScheduledCare::Fertilize => "fertilize",
        }
    }
}

impl fmt::Display for ScheduledCare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ScheduledCare> for CareAction {
    fn from(care: ScheduledCare) -> Self {
        match care {
            ScheduledCare::Water => CareAction::Water,
            ScheduledCare::Fertilize => CareAction::Fertilize,
        }
    }
}

/// Anything that can be logged against a plant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CareAction {
    Water,
    Fertilize,
    Repot,
    Prune,
    Mist,
    Rotate,
}

impl CareAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareAction::Water => "water",
            CareAction::Fertilize => "fertilize",
            CareAction::Repot => "repot",
            CareAction::Prune => "prune",
            CareAction::Mist => "mist",
            CareAction::Rotate => "rotate",
        }
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CareAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "water" => Ok(CareAction::Water),
            "fertilize" => Ok(CareAction::Fertilize),
            "repot" => Ok(CareAction::Repot),
            "prune" => Ok(CareAction::Prune),
            "mist" => Ok(CareAction::Mist),
            "rotate" => Ok(CareAction::Rotate),
            other => Err(format!("unknown care action: {other}")),
        }
    }
}

/// Append-only record of care performed on a plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareEvent {
    pub id: String,
    pub plant_id: String,
    pub action: CareAction,
    pub performed_at: Timestamp,
    #[serde(default)]
    pub notes: String,
}
