//! In-memory trip table for the selected cities.
//!
//! Each [`Row`] pairs a typed [`Trip`] with the raw cells it was read from so
//! the raw data pager can show rows in their original column order.

mod loader;
mod record;

pub use loader::{CityFiles, load, read_cities};
pub use record::{START_TIME_FORMAT, Trip};

use crate::filters::FilterSelection;

/// Columns appended to every row after the source columns.
pub const DERIVED_COLUMNS: [&str; 3] = ["Month", "Weekday", "Start Hour"];

/// Optional columns available in the loaded data.
///
/// Evaluated once from the loaded headers. A column counts as present when
/// any loaded city provides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    pub fn from_columns(columns: &[String]) -> Self {
        let has = |name: &str| columns.iter().any(|c| c == name);
        Schema {
            has_gender: has("Gender"),
            has_birth_year: has("Birth Year"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Row {
    pub trip: Trip,
    /// One cell per entry of [`TripDataset::columns`].
    pub cells: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TripDataset {
    columns: Vec<String>,
    rows: Vec<Row>,
    schema: Schema,
}

impl TripDataset {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let schema = Schema::from_columns(&columns);
        Self {
            columns,
            rows,
            schema,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn trips(&self) -> impl Iterator<Item = &Trip> {
        self.rows.iter().map(|row| &row.trip)
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Up to `size` rows starting at `start`, or `None` once `start` is past
    /// the end.
    pub fn page(&self, start: usize, size: usize) -> Option<&[Row]> {
        if start >= self.rows.len() {
            return None;
        }
        let end = self.rows.len().min(start.saturating_add(size));
        self.rows.get(start..end)
    }

    /// Keeps rows matching the month and weekday filters, preserving order.
    pub fn retain_matching(&mut self, filters: &FilterSelection) {
        self.rows
            .retain(|row| filters.matches(row.trip.month(), row.trip.weekday()));
    }
}
