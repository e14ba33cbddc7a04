//! Apartments and rooms plants live in.
//!
//! An apartment owns its rooms; a room is referenced by plants. Deleting
//! cascades downward and is enforced by the store, not the scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::species::LightLevel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Apartment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowDirection {
    North,
    East,
    South,
    West,
    #[default]
    None,
}

impl WindowDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowDirection::North => "north",
            WindowDirection::East => "east",
            WindowDirection::South => "south",
            WindowDirection::West => "west",
            WindowDirection::None => "none",
        }
    }
}

impl FromStr for WindowDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(WindowDirection::North),
            "east" => Ok(WindowDirection::East),
            "south" => Ok(WindowDirection::South),
            "west" => Ok(WindowDirection::West),
            "none" => Ok(WindowDirection::None),
            other => Err(format!("unknown window direction: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: String,
    pub apartment_id: String,
    pub name: String,
    pub light_level: LightLevel,
    #[serde(default)]
    pub window_direction: WindowDirection,
    #[serde(default)]
    pub notes: String,
}
