//! Domain models for launch missions and rocket families.
//!
//! These are the typed records produced by the parsers in
//! [`crate::parsing`] and held by the record store. All of them are plain
//! immutable values: once constructed they are never mutated, and the
//! query layer only ever reads them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::parsing::RowError;

/// Outcome of a launch attempt, matching the source taxonomy exactly.
///
/// Parsed by exact string match; an unknown token is a malformed-row
/// error, never a fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionStatus {
    Success,
    Failure,
    PartialFailure,
    PrelaunchFailure,
}

impl MissionStatus {
    /// All variants, in source-taxonomy order.
    pub const ALL: [MissionStatus; 4] = [
        MissionStatus::Success,
        MissionStatus::Failure,
        MissionStatus::PartialFailure,
        MissionStatus::PrelaunchFailure,
    ];

    /// The exact token used in the source data.
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::Success => "Success",
            MissionStatus::Failure => "Failure",
            MissionStatus::PartialFailure => "Partial Failure",
            MissionStatus::PrelaunchFailure => "Prelaunch Failure",
        }
    }
}

impl FromStr for MissionStatus {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| RowError::Status(s.to_string()))
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational status of a rocket family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RocketStatus {
    Active,
    Retired,
}

impl RocketStatus {
    pub const ALL: [RocketStatus; 2] = [RocketStatus::Active, RocketStatus::Retired];

    /// The exact token used in the source data.
    pub fn as_str(&self) -> &'static str {
        match self {
            RocketStatus::Active => "StatusActive",
            RocketStatus::Retired => "StatusRetired",
        }
    }
}

impl FromStr for RocketStatus {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| RowError::Status(s.to_string()))
    }
}

impl fmt::Display for RocketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The composite detail field of a mission: which rocket flew and what it
/// carried. Both parts are always present (possibly empty) strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detail {
    pub rocket_name: String,
    pub payload: String,
}

/// One launch attempt.
///
/// `location` is a comma-separated place hierarchy whose last segment is
/// the country (see [`Mission::country`]). `cost` is in millions of
/// currency units and absent when the source field is empty.
///
/// # Examples
///
/// ```
/// use launch_scan::parsing::parse_mission;
///
/// let line = "0,SpaceX,\"LC-39A, Kennedy Space Center, Florida, USA\",\
///             \"Fri Aug 07, 2020\",Falcon 9 Block 5 | Starlink V1 L9,\
///             StatusActive,\"50.0 \",Success";
/// let mission = parse_mission(line).unwrap();
///
/// assert_eq!(mission.company, "SpaceX");
/// assert_eq!(mission.country(), "USA");
/// assert_eq!(mission.cost, Some(50.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub company: String,
    pub location: String,
    pub date: NaiveDate,
    pub detail: Detail,
    pub rocket_status: RocketStatus,
    pub cost: Option<f64>,
    pub mission_status: MissionStatus,
}

impl Mission {
    /// The country a mission launched from: the segment of `location`
    /// after the final comma, with one leading space trimmed. A location
    /// with no comma is its own country.
    pub fn country(&self) -> &str {
        let tail = match self.location.rfind(',') {
            Some(idx) => &self.location[idx + 1..],
            None => &self.location,
        };
        tail.strip_prefix(' ').unwrap_or(tail)
    }

    /// Whether the launch date falls inside the inclusive `[from, to]`
    /// window.
    pub fn launched_within(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.date >= from && self.date <= to
    }
}

// Equality and hashing compare `cost` bitwise so that equal records hash
// equally even though the field is floating.
impl PartialEq for Mission {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.company == other.company
            && self.location == other.location
            && self.date == other.date
            && self.detail == other.detail
            && self.rocket_status == other.rocket_status
            && self.cost.map(f64::to_bits) == other.cost.map(f64::to_bits)
            && self.mission_status == other.mission_status
    }
}

impl Eq for Mission {}

impl Hash for Mission {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.company.hash(state);
        self.location.hash(state);
        self.date.hash(state);
        self.detail.hash(state);
        self.rocket_status.hash(state);
        self.cost.map(f64::to_bits).hash(state);
        self.mission_status.hash(state);
    }
}

/// A rocket family/model. `wiki` and `height` (meters) are independently
/// optional; absence means the source field was empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub name: String,
    pub wiki: Option<String>,
    pub height: Option<f64>,
}

impl PartialEq for Rocket {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.wiki == other.wiki
            && self.height.map(f64::to_bits) == other.height.map(f64::to_bits)
    }
}

impl Eq for Rocket {}

impl Hash for Rocket {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.wiki.hash(state);
        self.height.map(f64::to_bits).hash(state);
    }
}
