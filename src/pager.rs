//! Paging through raw trip rows five at a time.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::dataset::TripDataset;
use crate::given;
use crate::output::render_page;
use crate::prompt::{Confirm, Console, Reply};

pub const PAGE_SIZE: usize = 5;

const MORE_PROMPT: &str = "Do you want to see more raw data? [y/n]\n>";
const NO_MORE_DATA: &str = "No more data to display.";

/// Shows consecutive pages of `dataset` from row 0, asking before each
/// further page.
///
/// Once the next page would start past the last row, reports that no data is
/// left without asking again.
pub fn page_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dataset: &TripDataset,
) -> Result<Reply<()>> {
    console.say("\nYou opted to view raw data.")?;

    let mut start = 0;
    loop {
        let Some(rows) = dataset.page(start, PAGE_SIZE) else {
            console.say(NO_MORE_DATA)?;
            return Ok(Reply::Given(()));
        };

        console.say(&render_page(dataset.columns(), rows).to_string())?;
        start += PAGE_SIZE;

        if start >= dataset.len() {
            continue;
        }

        match given!(console.ask_choice::<Confirm>(MORE_PROMPT)?) {
            Confirm::Yes => {}
            Confirm::No => return Ok(Reply::Given(())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::City;
    use crate::test_utils::{CHICAGO_CSV, WASHINGTON_CSV, dataset_from, output_of, scripted_console};

    #[test]
    fn test_seven_rows_take_two_pages() {
        let dataset = dataset_from(City::Chicago, CHICAGO_CSV);
        let mut console = scripted_console(&["y"]);

        let reply = page_raw_data(&mut console, &dataset).unwrap();
        assert_eq!(reply, Reply::Given(()));

        let output = output_of(console);
        assert_eq!(output.matches(MORE_PROMPT).count(), 1);
        assert!(output.ends_with(&format!("{NO_MORE_DATA}\n")));

        let (first, second) = output.split_once(MORE_PROMPT).unwrap();
        // Rows 1-5 on the first page, rows 6-7 on the second.
        assert!(first.contains("2017-01-02 08:05:00"));
        assert!(first.contains("2017-02-07 12:00:00"));
        assert!(!first.contains("2017-03-06 08:45:00"));
        assert!(second.contains("2017-03-06 08:45:00"));
        assert!(second.contains("2017-06-05 18:00:00"));
        assert!(!second.contains("2017-01-02 08:05:00"));
    }

    #[test]
    fn test_declining_stops_after_first_page() {
        let dataset = dataset_from(City::Chicago, CHICAGO_CSV);
        let mut console = scripted_console(&["n"]);

        let reply = page_raw_data(&mut console, &dataset).unwrap();
        assert_eq!(reply, Reply::Given(()));

        let output = output_of(console);
        assert!(!output.contains(NO_MORE_DATA));
        assert!(!output.contains("2017-03-06 08:45:00"));
    }

    #[test]
    fn test_short_dataset_needs_no_prompt() {
        let dataset = dataset_from(City::Washington, WASHINGTON_CSV);
        let mut console = scripted_console(&[]);

        page_raw_data(&mut console, &dataset).unwrap();

        let output = output_of(console);
        assert!(!output.contains(MORE_PROMPT));
        assert!(output.contains(NO_MORE_DATA));
    }

    #[test]
    fn test_abort_while_paging() {
        let dataset = dataset_from(City::Chicago, CHICAGO_CSV);
        let mut console = scripted_console(&["end"]);

        let reply = page_raw_data(&mut console, &dataset).unwrap();
        assert_eq!(reply, Reply::Abort);
        assert!(output_of(console).ends_with(MORE_PROMPT));
    }
}
