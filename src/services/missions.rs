//! Mission queries: filtering, windowed aggregation, grouping, ranking.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{validate_limit, validate_window};
use crate::core::domain::{Mission, MissionStatus, RocketStatus};
use crate::core::store::RecordStore;
use crate::error::Result;

/// Every mission in the store.
pub fn all_missions(store: &RecordStore) -> Vec<Mission> {
    store.missions().iter().cloned().collect()
}

/// Missions whose outcome matches `status`.
pub fn missions_with_status(store: &RecordStore, status: MissionStatus) -> Vec<Mission> {
    store
        .missions()
        .iter()
        .filter(|mission| mission.mission_status == status)
        .cloned()
        .collect()
}

/// The company with the most Success missions dated inside `[from, to]`.
/// Returns the empty string when no mission falls in the window.
pub fn company_with_most_successful_missions(
    store: &RecordStore,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<String> {
    validate_window(from, to)?;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for mission in store.missions() {
        if mission.mission_status == MissionStatus::Success && mission.launched_within(from, to) {
            *counts.entry(mission.company.as_str()).or_default() += 1;
        }
    }

    Ok(key_with_max_value(&counts).unwrap_or_default())
}

/// Missions grouped by launch country. Countries with no missions are
/// absent, never mapped to an empty list.
pub fn missions_per_country(store: &RecordStore) -> BTreeMap<String, Vec<Mission>> {
    let mut grouped: BTreeMap<String, Vec<Mission>> = BTreeMap::new();
    for mission in store.missions() {
        grouped
            .entry(mission.country().to_string())
            .or_default()
            .push(mission.clone());
    }
    grouped
}

/// Up to `n` missions with a known cost matching both statuses, ascending
/// by cost. Fewer than `n` matches returns all of them.
pub fn top_n_least_expensive_missions(
    store: &RecordStore,
    n: usize,
    mission_status: MissionStatus,
    rocket_status: RocketStatus,
) -> Result<Vec<Mission>> {
    validate_limit(n)?;

    let mut matches: Vec<Mission> = store
        .missions()
        .iter()
        .filter(|mission| {
            mission.cost.is_some()
                && mission.mission_status == mission_status
                && mission.rocket_status == rocket_status
        })
        .cloned()
        .collect();

    // Secondary key pins the order of equal-cost missions.
    matches.sort_by(|a, b| {
        a.cost
            .unwrap_or(0.0)
            .total_cmp(&b.cost.unwrap_or(0.0))
            .then_with(|| a.id.cmp(&b.id))
    });
    matches.truncate(n);

    Ok(matches)
}

/// Per company, the location it has launched from most often.
pub fn most_desired_location_per_company(store: &RecordStore) -> BTreeMap<String, String> {
    most_desired_locations(store.missions().iter())
}

/// Per company, the location with the most Success missions inside
/// `[from, to]`. Companies with no qualifying mission are absent.
pub fn most_desired_location_for_successful_missions_per_company(
    store: &RecordStore,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<BTreeMap<String, String>> {
    validate_window(from, to)?;

    Ok(most_desired_locations(store.missions().iter().filter(
        |mission| {
            mission.mission_status == MissionStatus::Success && mission.launched_within(from, to)
        },
    )))
}

fn most_desired_locations<'a>(
    missions: impl Iterator<Item = &'a Mission>,
) -> BTreeMap<String, String> {
    let mut per_company: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
    for mission in missions {
        *per_company
            .entry(mission.company.as_str())
            .or_default()
            .entry(mission.location.as_str())
            .or_default() += 1;
    }

    per_company
        .into_iter()
        .filter_map(|(company, locations)| {
            key_with_max_value(&locations).map(|location| (company.to_string(), location))
        })
        .collect()
}

/// First key reaching the maximum value; `BTreeMap` iteration makes that
/// the lexicographically smallest key among ties.
fn key_with_max_value(counts: &BTreeMap<&str, usize>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for (&key, &value) in counts {
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((key, value)),
        }
    }
    best.map(|(key, _)| key.to_string())
}
