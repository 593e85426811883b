pub mod flat_row;
pub mod payload;
pub mod station;
pub mod station_ref;
pub mod timestamp;
