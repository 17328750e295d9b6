//! City, month and weekday filters chosen at the start of a session.
//!
//! Each filter is a [`Selection`]: a single value or a set of values. Rows
//! match when their month is any of the selected months and their weekday is
//! any of the selected weekdays.

mod choice;
mod selection;

pub use choice::{City, Choice, Month, weekday_title};
pub use selection::Selection;

use chrono::Weekday;
use std::fmt;

/// The confirmed answer to the three filter prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub cities: Selection<City>,
    pub months: Selection<Month>,
    pub weekdays: Selection<Weekday>,
}

impl FilterSelection {
    /// Month filters combine with weekday filters conjunctively; values within
    /// one filter combine disjunctively.
    pub fn matches(&self, month: u32, weekday: Weekday) -> bool {
        Month::from_number(month).is_some_and(|m| self.months.contains(m))
            && self.weekdays.contains(weekday)
    }

    /// Title-case city names, comma separated, for user-facing messages.
    pub fn city_names(&self) -> String {
        let names: Vec<&str> = self.cities.values().iter().map(|c| c.title()).collect();
        names.join(", ")
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " City: {}", self.cities)?;
        writeln!(f, " Month: {}", self.months)?;
        write!(f, " Weekday: {}", self.weekdays)
    }
}
