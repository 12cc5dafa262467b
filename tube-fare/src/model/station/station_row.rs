use serde::{Deserialize, Serialize};

/// a row of the station reference file. any columns beyond these
/// two are ignored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StationRow {
    #[serde(rename = "Station Name")]
    pub station_name: String,
    #[serde(rename = "Zone")]
    pub zone: u32,
}
