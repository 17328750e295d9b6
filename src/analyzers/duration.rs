use std::fmt;

use super::types::DurationStats;
use crate::dataset::TripDataset;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

impl DurationStats {
    /// Total travel time and trip count. `None` for an empty dataset.
    #[tracing::instrument(skip_all, fields(trips = dataset.len()))]
    pub fn from_dataset(dataset: &TripDataset) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }

        Some(DurationStats {
            total_secs: dataset.trips().map(|t| t.duration_secs).sum(),
            trips: dataset.len(),
        })
    }

    pub fn mean_secs(&self) -> f64 {
        if self.trips == 0 {
            return 0.0;
        }
        self.total_secs as f64 / self.trips as f64
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total travel time: {}", format_total(self.total_secs))?;
        write!(
            f,
            "Mean travel time: {}",
            format_mean(self.total_secs, self.trips)
        )
    }
}

/// Formats seconds as `"{d}d {h}h {m}m {s}s"`.
pub fn format_total(secs: u64) -> String {
    format!(
        "{}d {}h {}m {}s",
        secs / SECS_PER_DAY,
        secs % SECS_PER_DAY / SECS_PER_HOUR,
        secs % SECS_PER_HOUR / SECS_PER_MINUTE,
        secs % SECS_PER_MINUTE
    )
}

/// Formats the mean of `trips` trips totalling `total_secs` as
/// `"{m}m {s}s"`.
///
/// Minutes are floored; seconds are the exact remainder, computed from the
/// integer total so that a mean of 125.7 prints as `2m 5.7s`.
pub fn format_mean(total_secs: u64, trips: usize) -> String {
    if trips == 0 {
        return "0m 0s".to_string();
    }

    let trips = trips as u64;
    let per_minute = SECS_PER_MINUTE * trips;
    let minutes = total_secs / per_minute;
    let seconds = (total_secs % per_minute) as f64 / trips as f64;

    format!("{minutes}m {seconds}s")
}
