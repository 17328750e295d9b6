//! Results of the statistics shown from the menu.

use chrono::Weekday;
use serde::Serialize;

/// Most frequent times of travel.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// Calendar month number.
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

/// Most popular stations and trip.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// `"<start> - <end>"`.
    pub route: String,
}

/// Total travel time over a number of trips.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DurationStats {
    pub total_secs: u64,
    pub trips: usize,
}

/// Oldest, youngest and most common rider birth year.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct BirthYears {
    pub oldest: i32,
    pub youngest: i32,
    pub most_common: i32,
}

/// Rider demographics.
///
/// `genders` is `None` when the data has no gender column. `birth_years` is
/// `None` when it has no birth year column or every cell is blank.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct UserStats {
    /// City names used in messages about missing columns.
    pub cities: String,
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYears>,
}
