//! Rocket queries and mission/rocket cross-referencing.

use std::collections::{BTreeMap, HashMap};

use super::validate_limit;
use crate::core::domain::{Mission, MissionStatus, Rocket, RocketStatus};
use crate::core::store::RecordStore;
use crate::error::Result;

/// Every rocket in the store.
pub fn all_rockets(store: &RecordStore) -> Vec<Rocket> {
    store.rockets().iter().cloned().collect()
}

/// Up to `n` rockets with a known height, descending. Fewer than `n`
/// matches returns all of them.
pub fn top_n_tallest_rockets(store: &RecordStore, n: usize) -> Result<Vec<Rocket>> {
    validate_limit(n)?;

    let mut matches: Vec<Rocket> = store
        .rockets()
        .iter()
        .filter(|rocket| rocket.height.is_some())
        .cloned()
        .collect();

    matches.sort_by(|a, b| {
        b.height
            .unwrap_or(0.0)
            .total_cmp(&a.height.unwrap_or(0.0))
            .then_with(|| a.id.cmp(&b.id))
    });
    matches.truncate(n);

    Ok(matches)
}

/// Rocket name → wiki URL, absent URLs included as `None`.
pub fn wiki_page_per_rocket(store: &RecordStore) -> BTreeMap<String, Option<String>> {
    store
        .rockets()
        .iter()
        .map(|rocket| (rocket.name.clone(), rocket.wiki.clone()))
        .collect()
}

/// Distinct wiki URLs of the rockets flown in the top-`n` most expensive
/// missions matching both statuses, in first-seen order.
///
/// The status filters apply to the ranking itself: missions are restricted
/// to the requested outcome and rocket status (and to a known cost) before
/// ranking by descending cost. Rockets without a wiki page, or absent from
/// the rocket set entirely, contribute nothing.
pub fn wiki_pages_for_most_expensive_missions(
    store: &RecordStore,
    n: usize,
    mission_status: MissionStatus,
    rocket_status: RocketStatus,
) -> Result<Vec<String>> {
    validate_limit(n)?;

    let wikis: HashMap<&str, Option<&str>> = store
        .rockets()
        .iter()
        .map(|rocket| (rocket.name.as_str(), rocket.wiki.as_deref()))
        .collect();

    let mut ranked: Vec<&Mission> = store
        .missions()
        .iter()
        .filter(|mission| {
            mission.cost.is_some()
                && mission.mission_status == mission_status
                && mission.rocket_status == rocket_status
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.cost
            .unwrap_or(0.0)
            .total_cmp(&a.cost.unwrap_or(0.0))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut pages: Vec<String> = Vec::new();
    for mission in ranked.into_iter().take(n) {
        if let Some(&Some(url)) = wikis.get(mission.detail.rocket_name.as_str()) {
            if !pages.iter().any(|seen| seen.as_str() == url) {
                pages.push(url.to_string());
            }
        }
    }

    Ok(pages)
}
