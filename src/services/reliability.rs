//! Reliability scoring and the encrypted winner export.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::NaiveDate;

use super::validate_window;
use crate::core::domain::{Mission, MissionStatus};
use crate::core::store::RecordStore;
use crate::crypto::SymmetricCipher;
use crate::error::Result;

/// Weighted success ratio of one rocket family's missions: a success
/// counts double relative to any other outcome, so
/// `(2 * successes + others) / (2 * total)`. An empty group scores zero.
///
/// `[Success, Success, Failure]` scores `5/6`.
pub fn reliability_score(missions: &[&Mission]) -> f64 {
    if missions.is_empty() {
        return 0.0;
    }

    let successes = missions
        .iter()
        .filter(|mission| mission.mission_status == MissionStatus::Success)
        .count();
    let others = missions.len() - successes;

    (2 * successes + others) as f64 / (2 * missions.len()) as f64
}

/// The rocket-family name with the maximum reliability score over the
/// missions launched inside `[from, to]`. The window restricts the
/// candidate missions before scoring. Returns the empty string when the
/// window holds no missions; ties break deterministically to the
/// lexicographically first name.
pub fn most_reliable_rocket(
    store: &RecordStore,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<String> {
    validate_window(from, to)?;

    let mut per_rocket: BTreeMap<&str, Vec<&Mission>> = BTreeMap::new();
    for mission in store.missions() {
        if mission.launched_within(from, to) {
            per_rocket
                .entry(mission.detail.rocket_name.as_str())
                .or_default()
                .push(mission);
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for (&name, missions) in &per_rocket {
        let score = reliability_score(missions);
        match best {
            Some((_, max)) if score <= max => {}
            _ => best = Some((name, score)),
        }
    }

    Ok(best.map(|(name, _)| name.to_string()).unwrap_or_default())
}

/// Select the most reliable rocket family in the window and write the
/// ciphertext of its name to `sink`. Cipher failures propagate without
/// retry; the caller owns the sink state.
pub fn save_most_reliable_rocket(
    store: &RecordStore,
    cipher: &dyn SymmetricCipher,
    sink: &mut dyn Write,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<()> {
    let winner = most_reliable_rocket(store, from, to)?;
    let ciphertext = cipher.encrypt(winner.as_bytes())?;
    sink.write_all(&ciphertext)?;

    Ok(())
}
