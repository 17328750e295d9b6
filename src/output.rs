//! Console formatting shared by the session and the statistics.
//!
//! Also logs computed statistics as JSON at debug level.

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use crate::dataset::Row;

/// Separator printed after each section.
pub const RULE: &str = "----------------------------------------";

/// `"This took N.NN seconds."` measured from `started`.
pub fn elapsed_line(started: Instant) -> String {
    format!("This took {:.2} seconds.", started.elapsed().as_secs_f64())
}

/// Logs a value as JSON.
pub fn log_json(value: &impl Serialize) -> Result<()> {
    debug!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Renders rows as a table under the dataset's column headers.
pub fn render_page(columns: &[String], rows: &[Row]) -> Table {
    let mut table = Table::new();

    let headers: Vec<Cell> = columns.iter().map(Cell::new).collect();
    table.set_header(headers);

    for row in rows {
        let cells: Vec<Cell> = row.cells.iter().map(Cell::new).collect();
        table.add_row(cells);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::TimeStats;
    use crate::filters::City;
    use crate::test_utils::{WASHINGTON_CSV, dataset_from};
    use chrono::Weekday;

    #[test]
    fn test_rule_is_forty_dashes() {
        assert_eq!(RULE.len(), 40);
        assert!(RULE.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_elapsed_line_format() {
        let line = elapsed_line(Instant::now());
        assert!(line.starts_with("This took 0."));
        assert!(line.ends_with(" seconds."));
    }

    #[test]
    fn test_log_json_does_not_panic() {
        let stats = TimeStats {
            month: 1,
            weekday: Weekday::Mon,
            hour: 8,
        };
        log_json(&stats).unwrap();
    }

    #[test]
    fn test_render_page_has_headers_and_cells() {
        let dataset = dataset_from(City::Washington, WASHINGTON_CSV);
        let table = render_page(dataset.columns(), &dataset.rows()[..2]).to_string();

        assert!(table.contains("Start Station"));
        assert!(table.contains("Start Hour"));
        assert!(table.contains("2017-01-02 07:00:00"));
        assert!(table.contains("420.25"));
        assert!(!table.contains("2017-04-03 10:00:00"));
    }
}
