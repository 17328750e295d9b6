//! Reading city CSV files into a [`TripDataset`].

use anyhow::{Context, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

use super::record::{Trip, TripRow};
use super::{DERIVED_COLUMNS, Row, TripDataset};
use crate::filters::{City, FilterSelection};

/// Directory holding the per-city CSV files.
#[derive(Debug, Clone)]
pub struct CityFiles {
    dir: PathBuf,
}

impl CityFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, city: City) -> PathBuf {
        self.dir.join(city.file_name())
    }
}

impl Default for CityFiles {
    /// Files are looked up in the working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

/// Loads every selected city and keeps the rows matching the month and
/// weekday filters.
///
/// # Errors
///
/// Returns an error if a city file cannot be opened, is not valid CSV, or
/// lacks one of the required columns.
#[tracing::instrument(skip_all, fields(cities = %filters.cities))]
pub fn load(files: &CityFiles, filters: &FilterSelection) -> Result<TripDataset> {
    let mut sources = Vec::new();
    for &city in filters.cities.values() {
        let path = files.path(city);
        let file = File::open(&path)
            .with_context(|| format!("failed to open trip data {}", path.display()))?;
        sources.push((city, file));
    }

    let mut dataset = read_cities(sources)?;
    let before = dataset.len();
    dataset.retain_matching(filters);
    debug!(before, after = dataset.len(), "Applied month and weekday filters");

    Ok(dataset)
}

/// Builds an unfiltered dataset from one CSV reader per city, concatenated in
/// the given order.
///
/// # Errors
///
/// Returns an error on malformed CSV or rows that cannot be coerced into a
/// [`Trip`].
pub fn read_cities<R: Read>(sources: impl IntoIterator<Item = (City, R)>) -> Result<TripDataset> {
    let tables = sources
        .into_iter()
        .map(|(city, reader)| read_table(city, reader))
        .collect::<Result<Vec<_>>>()?;

    // Union of all headers, in order of first appearance.
    let mut columns: Vec<String> = Vec::new();
    for table in &tables {
        for header in &table.headers {
            if !columns.iter().any(|c| c == header) {
                columns.push(header.to_string());
            }
        }
    }

    let mut rows = Vec::new();
    for table in &tables {
        let positions: Vec<Option<usize>> = columns
            .iter()
            .map(|column| table.headers.iter().position(|h| h == column))
            .collect();

        for (index, record) in table.records.iter().enumerate() {
            let parsed: TripRow = record.deserialize(Some(&table.headers)).with_context(|| {
                format!("{}: invalid trip on data row {}", table.city.file_name(), index + 1)
            })?;
            let trip = Trip::from(parsed);

            let mut cells: Vec<String> = positions
                .iter()
                .map(|position| {
                    position
                        .and_then(|i| record.get(i))
                        .unwrap_or_default()
                        .to_string()
                })
                .collect();
            cells.extend(trip.derived_cells());

            rows.push(Row { trip, cells });
        }
    }

    columns.extend(DERIVED_COLUMNS.iter().map(|c| c.to_string()));

    Ok(TripDataset::new(columns, rows))
}

struct CityTable {
    city: City,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

fn read_table<R: Read>(city: City, reader: R) -> Result<CityTable> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr
        .headers()
        .with_context(|| format!("{}: failed to read header row", city.file_name()))?
        .clone();

    let records = rdr
        .records()
        .collect::<csv::Result<Vec<_>>>()
        .with_context(|| format!("{}: malformed CSV", city.file_name()))?;

    debug!(city = %city, rows = records.len(), columns = headers.len(), "Read city table");

    Ok(CityTable {
        city,
        headers,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{Month, Selection};
    use crate::test_utils::{CHICAGO_CSV, WASHINGTON_CSV, fixtures_dir};
    use chrono::Weekday;
    use std::path::Path;

    #[test]
    fn test_read_cities_concatenates_row_counts() {
        let chicago = read_cities([(City::Chicago, CHICAGO_CSV.as_bytes())]).unwrap();
        let washington = read_cities([(City::Washington, WASHINGTON_CSV.as_bytes())]).unwrap();
        let both = read_cities([
            (City::Chicago, CHICAGO_CSV.as_bytes()),
            (City::Washington, WASHINGTON_CSV.as_bytes()),
        ])
        .unwrap();

        assert_eq!(chicago.len(), 7);
        assert_eq!(washington.len(), 3);
        assert_eq!(both.len(), chicago.len() + washington.len());
    }

    #[test]
    fn test_union_columns_keep_first_appearance_order() {
        let dataset = read_cities([
            (City::Washington, WASHINGTON_CSV.as_bytes()),
            (City::Chicago, CHICAGO_CSV.as_bytes()),
        ])
        .unwrap();

        assert_eq!(
            dataset.columns(),
            &[
                "",
                "Start Time",
                "End Time",
                "Trip Duration",
                "Start Station",
                "End Station",
                "User Type",
                "Gender",
                "Birth Year",
                "Month",
                "Weekday",
                "Start Hour",
            ]
        );

        // Washington rows come first and have blank gender cells.
        let first = &dataset.rows()[0];
        assert_eq!(first.cells[7], "");
        assert_eq!(first.cells[9..], ["1", "Monday", "7"]);
        assert!(dataset.schema().has_gender);
        assert!(dataset.schema().has_birth_year);
    }

    #[test]
    fn test_schema_without_optional_columns() {
        let dataset = read_cities([(City::Washington, WASHINGTON_CSV.as_bytes())]).unwrap();

        assert!(!dataset.schema().has_gender);
        assert!(!dataset.schema().has_birth_year);
    }

    #[test]
    fn test_load_applies_filters() {
        let filters = FilterSelection {
            cities: Selection::Multiple(vec![City::Chicago, City::NewYorkCity]),
            months: Selection::Multiple(vec![Month::January, Month::February]),
            weekdays: Selection::Single(Weekday::Tue),
        };

        let dataset = load(&CityFiles::new(fixtures_dir()), &filters).unwrap();

        // Chicago rows 3 and 5, New York City rows 1 and 2.
        assert_eq!(dataset.len(), 4);
        for trip in dataset.trips() {
            assert!(filters.matches(trip.month(), trip.weekday()));
        }
        let first_cells: Vec<&str> = dataset.rows().iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(first_cells, ["3", "5", "1", "2"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let filters = FilterSelection {
            cities: Selection::Single(City::Chicago),
            months: Selection::Single(Month::January),
            weekdays: Selection::Single(Weekday::Mon),
        };

        let result = load(&CityFiles::new("/nonexistent/bikeshare"), &filters);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_cities_reports_bad_row() {
        let csv = "Start Time,Trip Duration,Start Station,End Station\n\
                   2017-01-02 08:05:00,60,A,B\n\
                   yesterday,60,A,B\n";

        let err = read_cities([(City::Chicago, csv.as_bytes())]).unwrap_err();
        assert!(err.to_string().contains("data row 2"));
    }

    #[test]
    fn test_city_files_path() {
        let files = CityFiles::new("data");
        assert_eq!(files.path(City::NewYorkCity), Path::new("data/new_york_city.csv"));
        assert_eq!(CityFiles::default().path(City::Chicago), Path::new("./chicago.csv"));
    }
}
