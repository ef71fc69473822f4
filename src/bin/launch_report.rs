//! Load the two launch datasets and print a JSON summary of the headline
//! queries.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use launch_scan::core::domain::{Mission, MissionStatus, Rocket, RocketStatus};
use launch_scan::io::RecordStoreLoader;
use launch_scan::services::{missions, reliability, rockets};

#[derive(Serialize)]
struct Summary {
    mission_count: usize,
    rocket_count: usize,
    missions_per_country: BTreeMap<String, usize>,
    tallest_rockets: Vec<Rocket>,
    cheapest_successful_active_missions: Vec<Mission>,
    most_reliable_rocket: String,
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(missions_path), Some(rockets_path)) = (args.next(), args.next()) else {
        bail!("usage: launch_report <missions.csv> <rockets.csv>");
    };

    let store =
        RecordStoreLoader::load_from_files(Path::new(&missions_path), Path::new(&rockets_path))
            .context("failed to build the record store")?;

    let per_country = missions::missions_per_country(&store)
        .into_iter()
        .map(|(country, group)| (country, group.len()))
        .collect();

    let summary = Summary {
        mission_count: store.missions().len(),
        rocket_count: store.rockets().len(),
        missions_per_country: per_country,
        tallest_rockets: rockets::top_n_tallest_rockets(&store, 5)?,
        cheapest_successful_active_missions: missions::top_n_least_expensive_missions(
            &store,
            3,
            MissionStatus::Success,
            RocketStatus::Active,
        )?,
        most_reliable_rocket: reliability::most_reliable_rocket(
            &store,
            chrono::NaiveDate::MIN,
            chrono::NaiveDate::MAX,
        )?,
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
