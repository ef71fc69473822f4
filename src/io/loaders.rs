use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::store::RecordStore;
use crate::error::Result;

/// Unified entry point for building a [`RecordStore`] from disk or from
/// in-memory streams.
pub struct RecordStoreLoader;

impl RecordStoreLoader {
    /// Build the store from the two CSV files.
    pub fn load_from_files(missions_path: &Path, rockets_path: &Path) -> Result<RecordStore> {
        log::info!(
            "loading record store from {} and {}",
            missions_path.display(),
            rockets_path.display()
        );

        let missions = BufReader::new(File::open(missions_path)?);
        let rockets = BufReader::new(File::open(rockets_path)?);
        Self::load_from_readers(missions, rockets)
    }

    /// Build the store from two already-open streams.
    pub fn load_from_readers(
        missions: impl BufRead,
        rockets: impl BufRead,
    ) -> Result<RecordStore> {
        let store = RecordStore::from_readers(missions, rockets)?;
        log::info!(
            "record store built: {} missions, {} rockets",
            store.missions().len(),
            store.rockets().len()
        );

        Ok(store)
    }
}
