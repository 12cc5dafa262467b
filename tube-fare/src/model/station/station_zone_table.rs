use super::{StationError, StationRow, Zone};
use itertools::Itertools;
use std::{collections::HashMap, io::Read, path::Path};

/// read-only lookup from station name to fare zone.
#[derive(Clone, Debug, Default)]
pub struct StationZoneTable {
    zones: HashMap<String, Zone>,
}

impl StationZoneTable {
    /// reads a station table from a CSV file with `Station Name` and `Zone` columns.
    pub fn from_csv(path: &Path) -> Result<StationZoneTable, StationError> {
        let filepath = path.to_string_lossy().to_string();
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| StationError::ReadError {
                filepath: filepath.clone(),
                source,
            })?;
        let table = Self::from_csv_reader(reader)?;
        log::info!("read {} stations from '{filepath}'", table.station_count());
        Ok(table)
    }

    /// reads a station table from any source of CSV text.
    pub fn from_reader<R: Read>(rdr: R) -> Result<StationZoneTable, StationError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);
        Self::from_csv_reader(reader)
    }

    fn from_csv_reader<R: Read>(reader: csv::Reader<R>) -> Result<StationZoneTable, StationError> {
        let rows = reader
            .into_deserialize::<StationRow>()
            .enumerate()
            .map(|(idx, r)| r.map_err(|source| StationError::RowError { row: idx + 1, source }))
            .collect::<Result<Vec<StationRow>, StationError>>()?;
        Self::from_rows(rows)
    }

    /// builds a table from decoded rows. duplicate names are tolerated only
    /// when they agree on the zone.
    pub fn from_rows<I>(rows: I) -> Result<StationZoneTable, StationError>
    where
        I: IntoIterator<Item = StationRow>,
    {
        let mut zones: HashMap<String, Zone> = HashMap::new();
        for row in rows {
            if row.zone == 0 {
                return Err(StationError::InvalidZone(row.station_name));
            }
            match zones.get(&row.station_name) {
                Some(existing) if existing.0 != row.zone => {
                    return Err(StationError::ConflictingZones {
                        name: row.station_name,
                        first: existing.0,
                        second: row.zone,
                    });
                }
                Some(_) => {
                    log::warn!("station '{}' listed more than once", row.station_name);
                }
                None => {
                    zones.insert(row.station_name, Zone(row.zone));
                }
            }
        }
        if zones.is_empty() {
            return Err(StationError::EmptyTable);
        }
        Ok(StationZoneTable { zones })
    }

    /// zone of a station, failing for names not in the table.
    pub fn zone_of(&self, station_name: &str) -> Result<Zone, StationError> {
        self.zones
            .get(station_name)
            .copied()
            .ok_or_else(|| StationError::UnknownStation(station_name.to_string()))
    }

    pub fn contains(&self, station_name: &str) -> bool {
        self.zones.contains_key(station_name)
    }

    pub fn station_count(&self) -> usize {
        self.zones.len()
    }

    /// all stations ordered by zone, then by name.
    pub fn sorted_stations(&self) -> Vec<(&str, Zone)> {
        self.zones
            .iter()
            .map(|(name, zone)| (name.as_str(), *zone))
            .sorted_by(|(a_name, a_zone), (b_name, b_zone)| {
                a_zone.cmp(b_zone).then_with(|| a_name.cmp(b_name))
            })
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::StationZoneTable;
    use crate::model::station::{StationError, Zone};
    use std::path::PathBuf;

    const STATIONS: &str = "Station Name,Zone,Lines\n\
        Bank,1,Central\n\
        Brixton , 2 ,Victoria\n\
        Amersham,9,Metropolitan\n";

    #[test]
    fn test_reads_rows_and_ignores_extra_columns() {
        let table = StationZoneTable::from_reader(STATIONS.as_bytes()).expect("should load");
        assert_eq!(table.station_count(), 3);
        assert_eq!(table.zone_of("Bank").expect("bank"), Zone(1));
        assert_eq!(table.zone_of("Brixton").expect("trimmed"), Zone(2));
        assert_eq!(table.zone_of("Amersham").expect("amersham"), Zone(9));
    }

    #[test]
    fn test_unknown_station_is_an_error() {
        let table = StationZoneTable::from_reader(STATIONS.as_bytes()).expect("should load");
        match table.zone_of("Narnia") {
            Err(StationError::UnknownStation(name)) => assert_eq!(name, "Narnia"),
            other => panic!("expected unknown station, found {other:?}"),
        }
        assert!(!table.contains("bank"));
    }

    #[test]
    fn test_duplicate_rows() {
        let same = "Station Name,Zone\nBank,1\nBank,1\n";
        let table = StationZoneTable::from_reader(same.as_bytes()).expect("duplicates agree");
        assert_eq!(table.station_count(), 1);

        let conflicting = "Station Name,Zone\nBank,1\nBank,2\n";
        let result = StationZoneTable::from_reader(conflicting.as_bytes());
        assert!(matches!(
            result,
            Err(StationError::ConflictingZones { first: 1, second: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_zone_zero_empty_and_malformed() {
        let zero = "Station Name,Zone\nNowhere,0\n";
        assert!(matches!(
            StationZoneTable::from_reader(zero.as_bytes()),
            Err(StationError::InvalidZone(_))
        ));

        let empty = "Station Name,Zone\n";
        assert!(matches!(
            StationZoneTable::from_reader(empty.as_bytes()),
            Err(StationError::EmptyTable)
        ));

        let malformed = "Station Name,Zone\nBank,one\n";
        assert!(matches!(
            StationZoneTable::from_reader(malformed.as_bytes()),
            Err(StationError::RowError { row: 1, .. })
        ));
    }

    #[test]
    fn test_sorted_stations() {
        let table = StationZoneTable::from_reader(STATIONS.as_bytes()).expect("should load");
        let names = table
            .sorted_stations()
            .into_iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Bank", "Brixton", "Amersham"]);
    }

    #[test]
    fn test_bundled_station_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join("london_tube_stations.csv");
        let table = StationZoneTable::from_csv(&path)
            .unwrap_or_else(|e| panic!("failed reading {path:?}: {e}"));
        assert_eq!(table.zone_of("Baker Street").expect("baker street"), Zone(1));
        assert_eq!(table.zone_of("Chesham").expect("chesham"), Zone(9));
    }
}
