//! Trip rows as read from the city CSV files.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer};

use crate::filters::weekday_title;

/// Timestamp layout of the `Start Time` column.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single row deserialized from a city CSV file.
///
/// Columns are matched by header name; columns not listed here are kept only
/// as raw cells. Blank cells in optional columns deserialize to `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct TripRow {
    #[serde(rename = "Start Time", deserialize_with = "deserialize_start_time")]
    start_time: NaiveDateTime,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender")]
    gender: Option<String>,
    #[serde(rename = "Birth Year")]
    birth_year: Option<f64>,
}

fn deserialize_start_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(raw.trim(), START_TIME_FORMAT).map_err(serde::de::Error::custom)
}

/// One bike trip.
///
/// Month, weekday and start hour are derived from `start_time` on access, so
/// they can never disagree with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: u64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl Trip {
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// `"<start station> - <end station>"`.
    pub fn route(&self) -> String {
        format!("{} - {}", self.start_station, self.end_station)
    }

    /// Cells for the derived `Month`, `Weekday` and `Start Hour` columns.
    pub(crate) fn derived_cells(&self) -> [String; 3] {
        [
            self.month().to_string(),
            weekday_title(self.weekday()).to_string(),
            self.hour().to_string(),
        ]
    }
}

impl From<TripRow> for Trip {
    // Durations and birth years arrive as floats in some cities; both are
    // whole numbers in the model.
    fn from(row: TripRow) -> Self {
        Trip {
            start_time: row.start_time,
            start_station: row.start_station,
            end_station: row.end_station,
            duration_secs: row.trip_duration.floor() as u64,
            user_type: row.user_type,
            gender: row.gender,
            birth_year: row.birth_year.map(|year| year as i32),
        }
    }
}
