use std::fmt;

use super::types::TimeStats;
use super::utility::mode;
use crate::dataset::{Trip, TripDataset};
use crate::filters::{Month, weekday_title};

impl TimeStats {
    /// Most common month, weekday and start hour. `None` for an empty dataset.
    #[tracing::instrument(skip_all, fields(trips = dataset.len()))]
    pub fn from_dataset(dataset: &TripDataset) -> Option<Self> {
        Some(TimeStats {
            month: mode(dataset.trips().map(Trip::month))?,
            weekday: mode(dataset.trips().map(Trip::weekday))?,
            hour: mode(dataset.trips().map(Trip::hour))?,
        })
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Month::from_number(self.month) {
            Some(month) => writeln!(f, "Most common month: {month}")?,
            None => writeln!(f, "Most common month: {}", self.month)?,
        }
        writeln!(f, "Most common day: {}", weekday_title(self.weekday))?;
        write!(f, "Most common start hour: {}", self.hour)
    }
}
