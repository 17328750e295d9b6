use std::fmt;

use super::types::StationStats;
use super::utility::mode;
use crate::dataset::{Trip, TripDataset};

impl StationStats {
    /// Most common start station, end station and start-to-end trip. `None`
    /// for an empty dataset.
    #[tracing::instrument(skip_all, fields(trips = dataset.len()))]
    pub fn from_dataset(dataset: &TripDataset) -> Option<Self> {
        let start_station = mode(dataset.trips().map(|t| t.start_station.as_str()))?;
        let end_station = mode(dataset.trips().map(|t| t.end_station.as_str()))?;
        let route = mode(dataset.trips().map(Trip::route))?;

        Some(StationStats {
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            route,
        })
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most common start station: {}", self.start_station)?;
        writeln!(f, "Most common end station: {}", self.end_station)?;
        write!(f, "Most common trip: {}", self.route)
    }
}
