//! Shared fixtures for unit tests.

use std::io::Cursor;

use crate::dataset::{TripDataset, read_cities};
use crate::filters::City;
use crate::prompt::Console;

pub(crate) const CHICAGO_CSV: &str = include_str!("../tests/fixtures/chicago.csv");
pub(crate) const NEW_YORK_CITY_CSV: &str = include_str!("../tests/fixtures/new_york_city.csv");
pub(crate) const WASHINGTON_CSV: &str = include_str!("../tests/fixtures/washington.csv");

pub(crate) fn fixtures_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures")
}

/// Unfiltered dataset for a single city.
pub(crate) fn dataset_from(city: City, csv: &str) -> TripDataset {
    read_cities([(city, csv.as_bytes())]).unwrap()
}

/// Console fed with the given lines, writing into a buffer.
pub(crate) fn scripted_console(lines: &[&str]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    let mut input = lines.join("\n");
    input.push('\n');
    Console::new(Cursor::new(input.into_bytes()), Vec::new())
}

pub(crate) fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}
