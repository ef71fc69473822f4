//! The immutable, deduplicated record store.

use std::collections::HashSet;
use std::hash::Hash;
use std::io::BufRead;

use crate::core::domain::{Mission, Rocket};
use crate::error::{Result, ScanError};
use crate::parsing::{parse_mission, parse_rocket, RowError};

/// The two record sets, built once from the input streams and read-only
/// thereafter. Duplicate rows (by full value equality) collapse to one
/// entry; iteration order carries no meaning — queries that need order
/// sort explicitly.
///
/// Construction fails on the first malformed row, carrying its 1-based
/// line number; a failed build exposes no partial store.
#[derive(Debug)]
pub struct RecordStore {
    missions: HashSet<Mission>,
    rockets: HashSet<Rocket>,
}

impl RecordStore {
    /// Build the store from two streams, each a header line followed by
    /// one record per line.
    pub fn from_readers(missions: impl BufRead, rockets: impl BufRead) -> Result<Self> {
        Ok(Self {
            missions: read_records(missions, parse_mission)?,
            rockets: read_records(rockets, parse_rocket)?,
        })
    }

    pub fn missions(&self) -> &HashSet<Mission> {
        &self.missions
    }

    pub fn rockets(&self) -> &HashSet<Rocket> {
        &self.rockets
    }
}

fn read_records<T, F>(reader: impl BufRead, parse: F) -> Result<HashSet<T>>
where
    T: Eq + Hash,
    F: Fn(&str) -> std::result::Result<T, RowError>,
{
    let mut records = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 || line.is_empty() {
            // Header line, discarded; blank lines (e.g. a trailing
            // newline pair from a CSV export) hold no record.
            continue;
        }

        let record = parse(&line).map_err(|reason| ScanError::MalformedRecord {
            line: index + 1,
            reason,
        })?;
        records.insert(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MISSIONS: &str = "\
Unnamed: 0,Company Name,Location,Datum,Detail,Status Rocket,Rocket,Status Mission
0,SpaceX,\"LC-39A, Kennedy Space Center, Florida, USA\",\"Fri Aug 07, 2020\",Falcon 9 Block 5 | Starlink V1 L9,StatusActive,\"50.0 \",Success
1,CASC,\"Site 9401, Jiuquan Satellite Launch Center, China\",\"Thu Aug 06, 2020\",Long March 2D | Gaofen-9 04,StatusActive,\"29.75 \",Success
";

    const ROCKETS: &str = "\
\"\",Name,Wiki,Rocket Height
0,Tsyklon-3,https://en.wikipedia.org/wiki/Tsyklon-3,39.0 m
1,Tsyklon-4M,https://en.wikipedia.org/wiki/Cyclone-4M,38.7 m
";

    #[test]
    fn test_store_holds_all_valid_rows() {
        let store =
            RecordStore::from_readers(Cursor::new(MISSIONS), Cursor::new(ROCKETS)).unwrap();
        assert_eq!(store.missions().len(), 2);
        assert_eq!(store.rockets().len(), 2);
    }

    #[test]
    fn test_store_deduplicates_identical_rows() {
        let duplicated = format!(
            "{}0,SpaceX,\"LC-39A, Kennedy Space Center, Florida, USA\",\"Fri Aug 07, 2020\",Falcon 9 Block 5 | Starlink V1 L9,StatusActive,\"50.0 \",Success\n",
            MISSIONS
        );
        let store =
            RecordStore::from_readers(Cursor::new(duplicated), Cursor::new(ROCKETS)).unwrap();
        assert_eq!(store.missions().len(), 2);
    }

    #[test]
    fn test_store_ignores_blank_lines() {
        // CSV exports commonly end in a blank line; interior blanks hold
        // no record either.
        let padded = format!("{}\n", MISSIONS);
        let store =
            RecordStore::from_readers(Cursor::new(padded), Cursor::new(ROCKETS)).unwrap();
        assert_eq!(store.missions().len(), 2);

        let interior = MISSIONS.replacen('\n', "\n\n", 2);
        let store =
            RecordStore::from_readers(Cursor::new(interior), Cursor::new(ROCKETS)).unwrap();
        assert_eq!(store.missions().len(), 2);
    }

    #[test]
    fn test_store_reports_offending_line() {
        let broken = format!("{}not a mission row\n", MISSIONS);
        let err =
            RecordStore::from_readers(Cursor::new(broken), Cursor::new(ROCKETS)).unwrap_err();

        match err {
            ScanError::MalformedRecord { line, .. } => assert_eq!(line, 4),
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_store_surfaces_stream_failures_as_io() {
        struct FailingReader;

        impl std::io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("stream closed"))
            }
        }

        let err = RecordStore::from_readers(
            std::io::BufReader::new(FailingReader),
            Cursor::new(ROCKETS),
        )
        .unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
    }
}
