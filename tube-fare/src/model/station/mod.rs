mod station_error;
mod station_row;
mod station_zone_table;
mod zone;

pub use station_error::StationError;
pub use station_row::StationRow;
pub use station_zone_table::StationZoneTable;
pub use zone::Zone;
